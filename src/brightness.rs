//! Perceptual brightness correction.
//!
//! The eye does not see LED output linearly, so a linear percentage is mapped
//! through the CIE 1931 lightness curve onto the PWM register's 0..=128 range.

use crate::registers::PWM_MAX;

/// Highest accepted brightness percentage.
pub const MAX_PERCENT: u8 = 100;

/// PWM register value for each brightness percentage 0..=100.
pub const LIGHT_CORRECTION: [u8; MAX_PERCENT as usize + 1] = [
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, //
    0x02, 0x02, 0x02, 0x02, 0x03, 0x03, 0x03, 0x04, 0x04, 0x04, 0x04, 0x05, //
    0x05, 0x06, 0x06, 0x07, 0x07, 0x07, 0x08, 0x09, 0x09, 0x0A, 0x0A, 0x0B, //
    0x0C, 0x0C, 0x0D, 0x0E, 0x0E, 0x0F, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, //
    0x15, 0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1F, 0x20, 0x21, 0x23, //
    0x24, 0x25, 0x27, 0x28, 0x2A, 0x2C, 0x2D, 0x2F, 0x31, 0x32, 0x34, 0x36, //
    0x38, 0x3A, 0x3C, 0x3E, 0x40, 0x42, 0x44, 0x46, 0x49, 0x4B, 0x4D, 0x50, //
    0x52, 0x54, 0x57, 0x5A, 0x5C, 0x5F, 0x62, 0x64, 0x67, 0x6A, 0x6D, 0x70, //
    0x73, 0x76, 0x79, 0x7D, PWM_MAX,
];

/// Corrected PWM value for `percent`, or `None` above [`MAX_PERCENT`].
pub const fn correct(percent: u8) -> Option<u8> {
    if percent > MAX_PERCENT {
        None
    } else {
        Some(LIGHT_CORRECTION[percent as usize])
    }
}
