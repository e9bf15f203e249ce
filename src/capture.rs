//! Frame capture to disk.
//!
//! Converts the packed ARGB frame buffer into an RGBA image and saves it
//! with the format implied by the file extension (PNG in the main loop).

use image::{ImageBuffer, Rgba};
use std::path::Path;

fn argb_to_rgba(pixel: u32) -> [u8; 4] {
    [
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
        ((pixel >> 24) & 0xFF) as u8,
    ]
}

/// Writes one rendered frame to `path`.
///
/// `pixels` is the frame in row-major packed ARGB, `width * height` long.
pub fn save_frame<P: AsRef<Path>>(
    path: P,
    pixels: &[u32],
    width: u32,
    height: u32,
) -> Result<(), image::ImageError> {
    debug_assert_eq!(pixels.len(), (width * height) as usize);

    let mut out = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(width, height);
    for (x, y, target) in out.enumerate_pixels_mut() {
        *target = Rgba(argb_to_rgba(pixels[(y * width + x) as usize]));
    }
    out.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn channel_order_converts_from_argb() {
        assert_eq!(argb_to_rgba(0xFF00_14C8), [0, 20, 200, 255]);
        assert_eq!(argb_to_rgba(0x8040_2010), [64, 32, 16, 128]);
    }

    #[test]
    fn saved_frame_round_trips_through_png() {
        let path = std::env::temp_dir().join("raywalk-capture-test.png");
        let pixels = [colors::WALL, colors::rgb(255, 0, 0)];

        save_frame(&path, &pixels, 2, 1).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.dimensions(), (2, 1));
        assert_eq!(loaded.get_pixel(0, 0).0, [0, 20, 200, 255]);
        assert_eq!(loaded.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }
}
