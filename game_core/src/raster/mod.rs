//! Software rasterizer over a flat RGBA byte buffer

pub mod glyphs;
pub mod shapes;

pub use glyphs::*;
pub use shapes::*;

use crate::components::Color;

/// RGBA8 frame, row-major, 4 bytes per pixel
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row, for texture uploads
    pub fn stride(&self) -> u32 {
        self.width * 4
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write one pixel's RGB. The offset is computed without per-axis
    /// clipping, so an x past the right edge wraps onto the next row; only
    /// offsets outside `[0, len - 4)` are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let index = (y as i64 * self.width as i64 + x as i64) * 4;
        if index < 0 || index >= self.pixels.len() as i64 - 4 {
            return;
        }
        let index = index as usize;
        self.pixels[index] = color.r;
        self.pixels[index + 1] = color.g;
        self.pixels[index + 2] = color.b;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[index..index + 4]);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);

    #[test]
    fn test_set_pixel_writes_rgb_only() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.set_pixel(1, 2, RED);
        assert_eq!(buf.pixel(1, 2), Some([255, 0, 0, 0]));
        assert_eq!(buf.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.set_pixel(-1, 0, RED);
        buf.set_pixel(0, -1, RED);
        buf.set_pixel(0, 4, RED);
        buf.set_pixel(1000, 1000, RED);
        buf.set_pixel(i32::MIN, i32::MAX, RED);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_last_pixel_is_never_written() {
        // offset len - 4 is outside the accepted range
        let mut buf = PixelBuffer::new(4, 4);
        buf.set_pixel(3, 3, RED);
        assert_eq!(buf.pixel(3, 3), Some([0, 0, 0, 0]));
        buf.set_pixel(2, 3, RED);
        assert_eq!(buf.pixel(2, 3), Some([255, 0, 0, 0]));
    }

    #[test]
    fn test_overflowing_x_wraps_to_next_row() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.set_pixel(5, 0, RED);
        assert_eq!(buf.pixel(1, 1), Some([255, 0, 0, 0]));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut buf = PixelBuffer::new(8, 8);
        buf.set_pixel(3, 3, Color::WHITE);
        buf.clear();
        let once = buf.as_bytes().to_vec();
        buf.clear();
        assert_eq!(buf.as_bytes(), once.as_slice());
        assert!(once.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_dimensions() {
        let buf = PixelBuffer::new(800, 600);
        assert_eq!(buf.as_bytes().len(), 800 * 600 * 4);
        assert_eq!(buf.stride(), 3200);
        assert_eq!(buf.pixel(800, 0), None);
    }
}
