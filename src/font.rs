//! Character glyph table (gfedcba, decimal point on bit 7).
//!
//! Letters are case-insensitive. Some letters share a shape with a digit or
//! another letter (`O`/`0`, `S`/`5`, `I`/`1`, `Z`/`2`, `U`/`V`, `H`/`K`/`X`);
//! seven segments only go so far.

use crate::data_types::Glyph;

/// Segment pattern for a character. Unsupported characters are blank.
pub const fn glyph_of(c: char) -> Glyph {
    use Glyph::{Double, Single};

    match c.to_ascii_uppercase() {
        '0' => Single(0x3F),
        '1' => Single(0x06),
        '2' => Single(0x5B),
        '3' => Single(0x4F),
        '4' => Single(0x66),
        '5' => Single(0x6D),
        '6' => Single(0x7D),
        '7' => Single(0x07),
        '8' => Single(0x7F),
        '9' => Single(0x6F),

        'A' => Single(0x77),
        'B' => Single(0x7C),
        'C' => Single(0x39),
        'D' => Single(0x5E),
        'E' => Single(0x79),
        'F' => Single(0x71),
        'G' => Single(0x3D),
        'H' => Single(0x76),
        'I' => Single(0x06),
        'J' => Single(0x1E),
        'K' => Single(0x76),
        'L' => Single(0x38),
        'M' => Double(0x33, 0x27),
        'N' => Single(0x54),
        'O' => Single(0x3F),
        'P' => Single(0x73),
        'Q' => Single(0x67),
        'R' => Single(0x50),
        'S' => Single(0x6D),
        'T' => Single(0x78),
        'U' => Single(0x3E),
        'V' => Single(0x3E),
        'W' => Double(0x3C, 0x1E),
        'X' => Single(0x76),
        'Y' => Single(0x6E),
        'Z' => Single(0x5B),

        '?' => Single(0xA3),
        '!' => Single(0x82),
        '-' => Single(0x40),

        _ => Glyph::BLANK,
    }
}

/// Glyph for a raw ASCII byte. Bytes above 0x7F are blank.
pub const fn glyph_of_byte(b: u8) -> Glyph {
    if b.is_ascii() {
        glyph_of(b as char)
    } else {
        Glyph::BLANK
    }
}
