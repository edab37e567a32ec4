//! GhostLab42 Reboot display driver
//!
//! Drives the Reboot board set: a 4-digit and a 6-digit seven-segment display,
//! each behind an IS31FL3730 on a shared I2C bus. Text is encoded through a
//! fixed glyph table, brightness through a CIE 1931 correction table, and every
//! data write is staged and then latched with an Update Column write.
//! `no_std`, optional async (`async` feature) and `defmt` support.

#![no_std]

#[macro_use]
mod fmt;

pub mod brightness;
pub mod data_types;
pub mod driver;
pub mod error;
pub mod font;
pub mod registers;
pub mod transaction;

pub use data_types::{CurrentLimit, Display, Glyph};
pub use driver::Reboot;
pub use error::Error;
pub use font::glyph_of;
pub use transaction::resolve_address;
