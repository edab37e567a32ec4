//! Data types for the Reboot driver.

use crate::registers::{
    CURRENT_10MA, CURRENT_20MA, FOUR_DIGIT_COUNT, FOUR_DIGIT_I2C_ADDRESS, SIX_DIGIT_COUNT,
    SIX_DIGIT_I2C_ADDRESS,
};

/// One of the two displays on the board set.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Display {
    /// 4-digit display (0x63).
    FourDigit,
    /// 6-digit display (0x60).
    SixDigit,
}

impl Display {
    /// Both displays, in the order `init` configures them.
    pub const ALL: [Display; 2] = [Display::FourDigit, Display::SixDigit];

    /// Select a display by digit count. `4` is the 4-digit display; every other
    /// value, including nonsense like `0` or `7`, selects the 6-digit display.
    pub const fn from_digits(digits: u8) -> Self {
        match digits {
            4 => Display::FourDigit,
            _ => Display::SixDigit,
        }
    }

    /// Strict variant of [`Display::from_digits`]: only `4` and `6` are accepted.
    pub const fn try_from_digits(digits: u8) -> Option<Self> {
        match digits {
            4 => Some(Display::FourDigit),
            6 => Some(Display::SixDigit),
            _ => None,
        }
    }

    /// Number of digit positions.
    pub const fn digit_count(self) -> usize {
        match self {
            Display::FourDigit => FOUR_DIGIT_COUNT,
            Display::SixDigit => SIX_DIGIT_COUNT,
        }
    }

    /// Default 7-bit I2C address.
    pub const fn address(self) -> u8 {
        match self {
            Display::FourDigit => FOUR_DIGIT_I2C_ADDRESS,
            Display::SixDigit => SIX_DIGIT_I2C_ADDRESS,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Display::FourDigit => 0,
            Display::SixDigit => 1,
        }
    }
}

impl From<u8> for Display {
    fn from(digits: u8) -> Self {
        Display::from_digits(digits)
    }
}

/// Per-segment current setting written to the lighting effect register.
///
/// Only these two settings exist in the driver. The chip powers up at 40 mA,
/// which is more than the displays take.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurrentLimit {
    Min10mA,
    Max20mA,
}

impl CurrentLimit {
    pub const fn bits(self) -> u8 {
        match self {
            CurrentLimit::Min10mA => CURRENT_10MA,
            CurrentLimit::Max20mA => CURRENT_20MA,
        }
    }

    pub const fn milliamps(self) -> u8 {
        match self {
            CurrentLimit::Min10mA => 10,
            CurrentLimit::Max20mA => 20,
        }
    }
}

/// Segment bytes for one character. Most characters fit one digit; a few
/// (`M`, `W`) need two adjacent digits to be readable.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Glyph {
    Single(u8),
    Double(u8, u8),
}

impl Glyph {
    /// All segments off.
    pub const BLANK: Glyph = Glyph::Single(0x00);

    /// Number of data register bytes this glyph occupies.
    pub const fn width(self) -> usize {
        match self {
            Glyph::Single(_) => 1,
            Glyph::Double(..) => 2,
        }
    }

    /// Copy the segment bytes into `out`, returning how many were written.
    pub(crate) fn encode(self, out: &mut [u8]) -> usize {
        match self {
            Glyph::Single(a) => {
                out[0] = a;
                1
            }
            Glyph::Double(a, b) => {
                out[0] = a;
                out[1] = b;
                2
            }
        }
    }
}
