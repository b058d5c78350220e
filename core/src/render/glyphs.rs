//! Minimal 5x7 bitmap font for frame numbers and the title card.
//!
//! Only the characters those labels use are defined; anything else draws as
//! a blank cell.

use image::{GrayImage, Luma};

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
/// Horizontal advance in font pixels (glyph + 1 column gap).
pub const ADVANCE: u32 = GLYPH_W + 1;
/// Line height in font pixels.
pub const LINE_HEIGHT: u32 = GLYPH_H + 3;

const BLANK: [u8; 7] = [0; 7];

fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        _ => BLANK,
    }
}

/// Pixel width of `text` at `scale`, single line.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    (n * ADVANCE - 1) * scale
}

/// Draw `text` in black with its top-left corner at (`x`, `y`).
///
/// `\n` starts a new line. Pixels falling outside the image are dropped.
pub fn draw_text(img: &mut GrayImage, x: u32, y: u32, scale: u32, text: &str) {
    let (w, h) = img.dimensions();
    for (line_no, line) in text.lines().enumerate() {
        let line_y = y + line_no as u32 * LINE_HEIGHT * scale;
        for (col, c) in line.chars().enumerate() {
            let cell_x = x + col as u32 * ADVANCE * scale;
            for (row, bits) in glyph(c).iter().enumerate() {
                for bit in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - bit)) == 0 {
                        continue;
                    }
                    let px = cell_x + bit * scale;
                    let py = line_y + row as u32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let (ax, ay) = (px + dx, py + dy);
                            if ax < w && ay < h {
                                img.put_pixel(ax, ay, Luma([0]));
                            }
                        }
                    }
                }
            }
        }
    }
}
