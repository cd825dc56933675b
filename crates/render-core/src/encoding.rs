//! The WinAnsi (CP-1252) code points outside Latin-1, with their glyph widths.

/// `(char, WinAnsi byte, Helvetica width, Helvetica-Bold width)`.
#[rustfmt::skip]
pub(crate) const WIN_ANSI_EXTRAS: [(char, u8, u16, u16); 27] = [
    ('\u{20AC}', 0x80, 556, 556),  // Euro
    ('\u{201A}', 0x82, 222, 278),  // quotesinglbase
    ('\u{0192}', 0x83, 556, 556),  // florin
    ('\u{201E}', 0x84, 333, 500),  // quotedblbase
    ('\u{2026}', 0x85, 1000, 1000), // ellipsis
    ('\u{2020}', 0x86, 556, 556),  // dagger
    ('\u{2021}', 0x87, 556, 556),  // daggerdbl
    ('\u{02C6}', 0x88, 333, 333),  // circumflex
    ('\u{2030}', 0x89, 1000, 1000), // perthousand
    ('\u{0160}', 0x8A, 667, 667),  // Scaron
    ('\u{2039}', 0x8B, 333, 333),  // guilsinglleft
    ('\u{0152}', 0x8C, 1000, 1000), // OE
    ('\u{017D}', 0x8E, 611, 611),  // Zcaron
    ('\u{2018}', 0x91, 222, 278),  // quoteleft
    ('\u{2019}', 0x92, 222, 278),  // quoteright
    ('\u{201C}', 0x93, 333, 500),  // quotedblleft
    ('\u{201D}', 0x94, 333, 500),  // quotedblright
    ('\u{2022}', 0x95, 350, 350),  // bullet
    ('\u{2013}', 0x96, 556, 556),  // endash
    ('\u{2014}', 0x97, 1000, 1000), // emdash
    ('\u{02DC}', 0x98, 333, 333),  // tilde
    ('\u{2122}', 0x99, 1000, 1000), // trademark
    ('\u{0161}', 0x9A, 500, 556),  // scaron
    ('\u{203A}', 0x9B, 333, 333),  // guilsinglright
    ('\u{0153}', 0x9C, 944, 944),  // oe
    ('\u{017E}', 0x9E, 500, 500),  // zcaron
    ('\u{0178}', 0x9F, 667, 667),  // Ydieresis
];

pub(crate) fn win_ansi_extra(c: char) -> Option<&'static (char, u8, u16, u16)> {
    WIN_ANSI_EXTRAS.iter().find(|(ch, ..)| *ch == c)
}

/// The WinAnsi byte for `c`, if the encoding has one.
///
/// U+0080..U+009F are C1 controls in Unicode but printable glyphs in WinAnsi,
/// so they have no byte.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x00..=0x7F | 0xA0..=0xFF => Some(c as u8),
        0x80..=0x9F => None,
        _ => win_ansi_extra(c).map(|&(_, byte, ..)| byte),
    }
}
