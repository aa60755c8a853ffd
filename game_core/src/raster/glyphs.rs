//! 3x5 dot-matrix digits for the score display

use glam::Vec2;

use super::PixelBuffer;
use crate::components::Color;

pub const GLYPH_COLS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;

type Glyph = [u8; (GLYPH_COLS * GLYPH_ROWS) as usize];

/// Immutable table of digit bitmaps, row-major, 1 = lit
#[derive(Debug, Clone, Copy)]
pub struct DigitFont {
    glyphs: &'static [Glyph],
}

#[rustfmt::skip]
const DIGIT_GLYPHS: [Glyph; 4] = [
    [
        1, 1, 1,
        1, 0, 1,
        1, 0, 1,
        1, 0, 1,
        1, 1, 1,
    ],
    [
        1, 1, 0,
        0, 1, 0,
        0, 1, 0,
        0, 1, 0,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
        1, 0, 0,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
    ],
];

/// Digits 0 through 3, enough for a first-to-three match
pub const DIGITS: DigitFont = DigitFont {
    glyphs: &DIGIT_GLYPHS,
};

impl DigitFont {
    pub fn glyph(&self, digit: usize) -> Option<&Glyph> {
        self.glyphs.get(digit)
    }

    /// Draw `digit` centred on `center`, each lit cell a `size`-pixel square.
    /// Digits the font has no glyph for draw nothing.
    pub fn draw(&self, buf: &mut PixelBuffer, center: Vec2, color: Color, size: i32, digit: usize) {
        let Some(glyph) = self.glyph(digit) else {
            return;
        };

        let start_x = center.x as i32 - (size * GLYPH_COLS) / 2;
        let start_y = center.y as i32 - (size * GLYPH_ROWS) / 2;

        for (i, &lit) in glyph.iter().enumerate() {
            if lit == 0 {
                continue;
            }
            let col = i as i32 % GLYPH_COLS;
            let row = i as i32 / GLYPH_COLS;
            let x0 = start_x + col * size;
            let y0 = start_y + row * size;
            for y in y0..y0 + size {
                for x in x0..x0 + size {
                    buf.set_pixel(x, y, color);
                }
            }
        }
    }
}
