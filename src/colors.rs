//! ARGB8888 color constants and helpers.
//!
//! Every buffer in this crate stores pixels as 0xAARRGGBB, the same layout
//! the streaming texture in [`crate::window::Window`] is created with.

/// Frame clear color. Whatever a ray miss leaves uncovered shows this.
pub const BACKGROUND: u32 = rgb(0, 0, 0);

/// Flat wall strip color.
pub const WALL: u32 = rgb(0, 20, 200);

// Minimap overlay palette.
pub const MINIMAP_WALL: u32 = rgb(96, 96, 96);
pub const MINIMAP_FLOOR: u32 = rgb(24, 24, 24);
pub const MINIMAP_PLAYER: u32 = rgb(255, 255, 255);

/// Packs 8-bit channels into an opaque ARGB8888 color.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Packs float channels in [0.0, 1.0] into an ARGB8888 color.
/// Out-of-range values are clamped.
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Unpacks a color's RGB channels into floats in [0.0, 1.0]. Alpha is dropped.
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    (
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    )
}

/// Multiplies a color's RGB channels by an intensity in [0.0, 1.0],
/// leaving alpha untouched.
pub fn modulate(color: u32, intensity: f32) -> u32 {
    let intensity = intensity.clamp(0.0, 1.0);
    let (r, g, b) = unpack_color(color);
    let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
    pack_color(r * intensity, g * intensity, b * intensity, alpha)
}
