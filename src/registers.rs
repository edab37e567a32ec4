//! Register map and constants for the IS31FL3730 as wired on the Reboot boards.

/// I2C address of the 4-digit display.
pub const FOUR_DIGIT_I2C_ADDRESS: u8 = 0x63;
/// I2C address of the 6-digit display.
pub const SIX_DIGIT_I2C_ADDRESS: u8 = 0x60;

/// Register addresses.
pub mod addr {
    /// Matrix 1 data registers. Sequential bytes auto-increment into the next digit.
    pub const DATA: u8 = 0x01;
    /// Any write latches the staged data registers onto the display.
    pub const UPDATE_COLUMN: u8 = 0x0C;
    /// Lighting effect register, holds the row current setting.
    pub const LIGHTING_EFFECT: u8 = 0x0D;
    /// PWM register, 128 steps (0x00..=0x80).
    pub const PWM: u8 = 0x19;
    /// Any write resets every register to its power-up default.
    pub const RESET: u8 = 0xFF;
}

/// Lighting effect value for 10 mA per segment.
pub const CURRENT_10MA: u8 = 0x08;
/// Lighting effect value for 20 mA per segment, the most these displays tolerate.
pub const CURRENT_20MA: u8 = 0x0B;

/// Value sent with UPDATE_COLUMN and RESET writes. The chip ignores it.
pub const DONT_CARE: u8 = 0x00;

/// Largest value accepted by the PWM register.
pub const PWM_MAX: u8 = 0x80;

/// Digits on the 4-digit display.
pub const FOUR_DIGIT_COUNT: usize = 4;
/// Digits on the 6-digit display.
pub const SIX_DIGIT_COUNT: usize = 6;

bitflags::bitflags! {
    /// One digit's data register in gfedcba order, decimal point on bit 7.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Segments: u8 {
        const A  = 1 << 0;
        const B  = 1 << 1;
        const C  = 1 << 2;
        const D  = 1 << 3;
        const E  = 1 << 4;
        const F  = 1 << 5;
        const G  = 1 << 6;
        const DP = 1 << 7;
    }
}

impl Segments {
    /// All seven segments, decimal point off.
    pub const SEVEN: Self = Self::A
        .union(Self::B)
        .union(Self::C)
        .union(Self::D)
        .union(Self::E)
        .union(Self::F)
        .union(Self::G);
}
