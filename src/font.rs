use crate::pixels::{PixelBuf, Rgb};

const SHADOW: Rgb = Rgb(30, 30, 30);

// ── 3x5 bitmap glyphs ───────────────────────────────────────────────────────

#[rustfmt::skip]
static DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

#[rustfmt::skip]
static LETTERS: [(char, [u8; 15]); 16] = [
    ('A', [0,1,0, 1,0,1, 1,1,1, 1,0,1, 1,0,1]),
    ('C', [1,1,1, 1,0,0, 1,0,0, 1,0,0, 1,1,1]),
    ('E', [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,1,1]),
    ('F', [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,0,0]),
    ('G', [1,1,1, 1,0,0, 1,0,1, 1,0,1, 1,1,1]),
    ('I', [1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1]),
    ('L', [1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1]),
    ('M', [1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1]),
    ('N', [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1]),
    ('O', [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1]),
    ('Q', [1,1,1, 1,0,1, 1,0,1, 1,1,1, 0,0,1]),
    ('R', [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,0,1]),
    ('S', [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1]),
    ('T', [1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0]),
    ('U', [1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1]),
    ('V', [1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0]),
];

fn glyph(ch: char) -> Option<&'static [u8; 15]> {
    match ch {
        '0'..='9' => Some(&DIGITS[ch as usize - '0' as usize]),
        _ => LETTERS
            .iter()
            .find(|(c, _)| *c == ch.to_ascii_uppercase())
            .map(|(_, g)| g),
    }
}

/// Pixel width of `text` at `scale`: 3 columns per glyph plus a 1 column gap.
pub fn text_width(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { (n * 4 - 1) * scale }
}

fn draw_glyph(buf: &mut PixelBuf, x: i32, y: i32, glyph: &[u8; 15], fg: Rgb, scale: i32) {
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                let px = x + col as i32 * scale;
                let py = y + row as i32 * scale;
                buf.fill_rect(px + 1, py + 1, scale, scale, SHADOW);
                buf.fill_rect(px, py, scale, scale, fg);
            }
        }
    }
}

/// Draws `text` with its top-left corner at (x, y). Unknown characters
/// render as blanks.
pub fn draw_text(buf: &mut PixelBuf, x: i32, y: i32, text: &str, fg: Rgb, scale: i32) {
    let scale = scale.max(1);
    for (i, ch) in text.chars().enumerate() {
        if let Some(g) = glyph(ch) {
            draw_glyph(buf, x + i as i32 * 4 * scale, y, g, fg, scale);
        }
    }
}

/// Draws `text` horizontally centered on `cx`.
pub fn draw_centered(buf: &mut PixelBuf, cx: i32, y: i32, text: &str, fg: Rgb, scale: i32) {
    let scale = scale.max(1);
    draw_text(buf, cx - text_width(text, scale) / 2, y, text, fg, scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb(255, 255, 255);

    #[test]
    fn every_overlay_word_has_glyphs() {
        for word in ["SCORE", "GAME", "OVER", "RESTART", "QUIT", "FINAL"] {
            for ch in word.chars() {
                assert!(glyph(ch).is_some(), "missing glyph {ch}");
            }
        }
        assert!(glyph('x').is_none());
    }

    #[test]
    fn widths() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("7", 1), 3);
        assert_eq!(text_width("42", 1), 7);
        assert_eq!(text_width("42", 2), 14);
    }

    #[test]
    fn draws_a_one() {
        let mut buf = PixelBuf::new(8, 8);
        draw_text(&mut buf, 0, 0, "1", WHITE, 1);
        // middle column of "1" is lit top to bottom
        assert!((0..5).all(|y| buf.get(1, y) == WHITE));
        assert_eq!(buf.get(0, 0), Rgb(0, 0, 0));
    }

    #[test]
    fn scale_doubles_pixels() {
        let mut buf = PixelBuf::new(16, 16);
        draw_text(&mut buf, 0, 0, "1", WHITE, 2);
        assert_eq!(buf.get(2, 0), WHITE);
        assert_eq!(buf.get(3, 1), WHITE);
        assert_eq!(buf.get(2, 9), WHITE);
    }
}
