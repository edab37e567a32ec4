use ghostlab42_reboot::brightness::{correct, LIGHT_CORRECTION, MAX_PERCENT};
use ghostlab42_reboot::data_types::{CurrentLimit, Display, Glyph};
use ghostlab42_reboot::font::glyph_of;
use ghostlab42_reboot::registers::{addr, Segments, PWM_MAX};
use ghostlab42_reboot::resolve_address;

#[test]
fn digits_match_gfedcba_table() {
    let expected = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];
    for (c, bits) in ('0'..='9').zip(expected) {
        assert_eq!(glyph_of(c), Glyph::Single(bits), "digit {:?}", c);
    }
}

#[test]
fn letters_and_symbols() {
    assert_eq!(glyph_of('A'), Glyph::Single(0x77));
    assert_eq!(glyph_of('r'), Glyph::Single(0x50));
    assert_eq!(glyph_of('M'), Glyph::Double(0x33, 0x27));
    assert_eq!(glyph_of('w'), Glyph::Double(0x3C, 0x1E));
    assert_eq!(glyph_of('!'), Glyph::Single((Segments::DP | Segments::B).bits()));
    assert_eq!(glyph_of(' '), Glyph::BLANK);
}

#[test]
fn glyph_lookup_is_deterministic() {
    for c in (0u8..=0x7F).map(char::from) {
        assert_eq!(glyph_of(c), glyph_of(c));
    }
}

#[test]
fn brightness_table_shape() {
    assert_eq!(LIGHT_CORRECTION.len(), MAX_PERCENT as usize + 1);
    assert_eq!(LIGHT_CORRECTION[0], 0x00);
    assert_eq!(LIGHT_CORRECTION[100], PWM_MAX);
    assert!(LIGHT_CORRECTION.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(correct(50), Some(LIGHT_CORRECTION[50]));
    assert_eq!(correct(MAX_PERCENT + 1), None);
}

#[test]
fn selector_normalization() {
    assert_eq!(Display::from_digits(4), Display::FourDigit);
    assert_eq!(Display::from(6), Display::SixDigit);
    for digits in [0u8, 5, 7, 255] {
        assert_eq!(Display::from_digits(digits), Display::SixDigit);
        assert_eq!(Display::try_from_digits(digits), None);
    }
    assert_eq!(Display::try_from_digits(4), Some(Display::FourDigit));
    assert_eq!(Display::FourDigit.digit_count(), 4);
    assert_eq!(Display::SixDigit.digit_count(), 6);
    assert_eq!(resolve_address(Display::FourDigit), 0x63);
    assert_eq!(resolve_address(Display::from_digits(0)), 0x60);
}

#[test]
fn register_map_and_current_codes() {
    assert_eq!(addr::DATA, 0x01);
    assert_eq!(addr::UPDATE_COLUMN, 0x0C);
    assert_eq!(addr::LIGHTING_EFFECT, 0x0D);
    assert_eq!(addr::PWM, 0x19);
    assert_eq!(addr::RESET, 0xFF);
    assert_eq!(CurrentLimit::Min10mA.bits(), 0x08);
    assert_eq!(CurrentLimit::Max20mA.bits(), 0x0B);
    assert_eq!(CurrentLimit::Max20mA.milliamps(), 20);
}
