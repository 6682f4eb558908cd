//! Bitmap text drawing into the RGBA frame, built on the compiled-in
//! 8x8 glyph tables.

use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::color::Rgba;

const GLYPH_SIZE: usize = 8;

pub fn char_width(scale: usize) -> usize {
    GLYPH_SIZE * scale
}

pub fn line_height(scale: usize) -> usize {
    GLYPH_SIZE * scale + 2 * scale
}

pub fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * char_width(scale)
}

/// Draws one glyph with its top-left corner at (x, y). Pixels falling
/// outside the frame are skipped.
pub fn draw_char(
    frame: &mut [u8],
    ch: char,
    x: usize,
    y: usize,
    color: Rgba,
    scale: usize,
    frame_width: usize,
) {
    let glyph = match BASIC_FONTS.get(ch) {
        Some(glyph) => glyph,
        None => BASIC_FONTS.get('?').unwrap_or_default(),
    };
    let frame_height = frame.len() / (frame_width * 4);
    let bytes = color.to_bytes();

    for (glyph_row, row_bits) in glyph.iter().enumerate() {
        for glyph_col in 0..GLYPH_SIZE {
            if row_bits & (1 << glyph_col) == 0 {
                continue;
            }
            for sub_y in 0..scale {
                for sub_x in 0..scale {
                    let px = x + glyph_col * scale + sub_x;
                    let py = y + glyph_row * scale + sub_y;
                    if px < frame_width && py < frame_height {
                        let idx = (py * frame_width + px) * 4;
                        frame[idx..idx + 4].copy_from_slice(&bytes);
                    }
                }
            }
        }
    }
}

/// Draws a line of text, stopping at the right frame edge.
pub fn draw_text(
    frame: &mut [u8],
    text: &str,
    x: usize,
    y: usize,
    color: Rgba,
    scale: usize,
    frame_width: usize,
) {
    let mut current_x = x;
    for ch in text.chars() {
        if current_x + char_width(scale) > frame_width {
            break;
        }
        draw_char(frame, ch, current_x, y, color, scale, frame_width);
        current_x += char_width(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn drawing_stays_inside_the_frame() {
        let width = 16usize;
        let mut frame = vec![0u8; width * 16 * 4];
        // Top-left corner is fine, far corner clips without panicking.
        draw_text(&mut frame, "hi", 0, 0, color::WHITE, 1, width);
        draw_char(&mut frame, 'x', 14, 14, color::WHITE, 2, width);
        assert!(frame.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn widths_scale_with_the_glyph_grid() {
        assert_eq!(char_width(2), 16);
        assert_eq!(text_width("abcd", 1), 32);
        assert!(line_height(2) > char_width(2) / 8);
    }
}
