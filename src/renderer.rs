//! CPU frame buffer and the primitive draws the engine is built from.

use crate::colors;
use crate::projection::Strip;

/// Owns the ARGB color buffer one frame is composed into.
pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Creates a renderer with a `width` x `height` buffer filled with the
    /// background color.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    /// Reallocates the buffer for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills the whole buffer with one color.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Writes one pixel; coordinates outside the buffer are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Reads one pixel, or `None` outside the buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            Some(self.color_buffer[index])
        } else {
            None
        }
    }

    /// Draws a vertical wall strip in column `x`. Rows outside the buffer
    /// clip away pixel by pixel.
    pub fn draw_strip(&mut self, x: i32, strip: &Strip) {
        for dy in 0..strip.height as i32 {
            self.set_pixel(x, strip.top + dy, strip.color);
        }
    }

    /// Fills an axis-aligned rectangle, clipped to the buffer.
    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Returns the buffer as raw bytes in memory order, for handing to a
    /// streaming texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Returns the buffer as packed ARGB pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_starts_as_background() {
        let renderer = Renderer::new(4, 3);
        assert_eq!(renderer.pixels().len(), 12);
        assert!(renderer.pixels().iter().all(|&p| p == colors::BACKGROUND));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut renderer = Renderer::new(4, 4);
        renderer.set_pixel(-1, 0, colors::WALL);
        renderer.set_pixel(0, -1, colors::WALL);
        renderer.set_pixel(4, 0, colors::WALL);
        renderer.set_pixel(0, 4, colors::WALL);
        assert!(renderer.pixels().iter().all(|&p| p == colors::BACKGROUND));
        assert_eq!(renderer.get_pixel(4, 0), None);
    }

    #[test]
    fn strip_covers_exactly_its_rows() {
        let mut renderer = Renderer::new(8, 8);
        let strip = Strip {
            top: 2,
            height: 4,
            color: colors::WALL,
        };
        renderer.draw_strip(3, &strip);

        for y in 0..8 {
            let expected = if (2..6).contains(&y) {
                colors::WALL
            } else {
                colors::BACKGROUND
            };
            assert_eq!(renderer.get_pixel(3, y), Some(expected), "row {y}");
        }
        // Neighboring columns stay untouched.
        assert_eq!(renderer.get_pixel(2, 3), Some(colors::BACKGROUND));
        assert_eq!(renderer.get_pixel(4, 3), Some(colors::BACKGROUND));
    }

    #[test]
    fn strips_clip_at_the_buffer_edges() {
        let mut renderer = Renderer::new(4, 4);
        let tall = Strip {
            top: -2,
            height: 8,
            color: colors::WALL,
        };
        renderer.draw_strip(1, &tall);

        for y in 0..4 {
            assert_eq!(renderer.get_pixel(1, y), Some(colors::WALL));
        }
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut renderer = Renderer::new(4, 4);
        renderer.set_pixel(1, 1, colors::WALL);
        renderer.resize(6, 2);

        assert_eq!(renderer.width(), 6);
        assert_eq!(renderer.height(), 2);
        assert_eq!(renderer.pixels().len(), 12);
        assert!(renderer.pixels().iter().all(|&p| p == colors::BACKGROUND));
    }

    #[test]
    fn bytes_view_matches_the_pixel_buffer() {
        let mut renderer = Renderer::new(2, 2);
        renderer.set_pixel(0, 0, colors::WALL);

        let bytes = renderer.as_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..4], colors::WALL.to_ne_bytes());
    }
}
