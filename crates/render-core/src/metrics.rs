//! Advance widths for the two standard fonts the renderer uses.
//!
//! Values are the Adobe AFM widths (units per 1000 em) for the printable ASCII
//! range and the WinAnsi punctuation above it. Anything else is measured with
//! a default width.

use crate::encoding::win_ansi_extra;
use crate::types::FontWeight;

const FIRST_CHAR: u32 = 32;
const DEFAULT_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn char_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    if let Some(width) = (c as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|idx| table.get(idx as usize))
    {
        return *width;
    }
    match (win_ansi_extra(c), weight) {
        (Some(&(_, _, regular, _)), FontWeight::Regular) => regular,
        (Some(&(_, _, _, bold)), FontWeight::Bold) => bold,
        (None, _) => DEFAULT_WIDTH,
    }
}

/// Width of `text` in points at `size`.
pub fn text_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, weight) as u32).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyph_widths() {
        assert_eq!(char_width(' ', FontWeight::Regular), 278);
        assert_eq!(char_width('A', FontWeight::Regular), 667);
        assert_eq!(char_width('A', FontWeight::Bold), 722);
        assert_eq!(char_width('i', FontWeight::Regular), 222);
        assert_eq!(char_width('~', FontWeight::Bold), 584);
    }

    #[test]
    fn win_ansi_punctuation_widths() {
        assert_eq!(char_width('\u{2019}', FontWeight::Regular), 222);
        assert_eq!(char_width('\u{2019}', FontWeight::Bold), 278);
        assert_eq!(char_width('\u{2014}', FontWeight::Regular), 1000);
        assert_eq!(char_width('\u{2022}', FontWeight::Bold), 350);
    }

    #[test]
    fn unmapped_chars_use_default() {
        assert_eq!(char_width('\u{0916}', FontWeight::Regular), DEFAULT_WIDTH);
        assert_eq!(char_width('\n', FontWeight::Bold), DEFAULT_WIDTH);
    }

    #[test]
    fn width_scales_with_size() {
        let at_ten = text_width("Hello", FontWeight::Regular, 10.0);
        let at_twenty = text_width("Hello", FontWeight::Regular, 20.0);
        assert!((at_twenty - 2.0 * at_ten).abs() < 1e-4);
        // H(722) e(556) l(222) l(222) o(556)
        assert!((at_ten - 22.78).abs() < 1e-3);
    }
}
