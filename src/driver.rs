//! Driver for the Reboot board set: two IS31FL3730 chips on one I2C bus.
//! Blocking API on `embedded_hal::i2c::I2c`; the async API mirrors it behind the
//! `async` feature.

use crate::brightness;
use crate::data_types::{CurrentLimit, Display, Glyph};
use crate::error::Error;
use crate::font::{glyph_of, glyph_of_byte};
use crate::registers::{addr, DONT_CARE};
use crate::transaction::Transaction;

/// Reboot dual-display driver.
///
/// The chips are write-only, so the current limit of each display is tracked
/// here as the last value successfully written (`None` until then, or after a
/// reset returns the chip to its 40 mA default).
pub struct Reboot<I2C> {
    i2c: I2C,
    addresses: [u8; 2],
    current: [Option<CurrentLimit>; 2],
}

impl<I2C> Reboot<I2C> {
    /// Create a driver using the board's fixed addresses (0x63 and 0x60).
    pub fn new(i2c: I2C) -> Self {
        Self::with_addresses(i2c, Display::FourDigit.address(), Display::SixDigit.address())
    }

    /// Create a driver with custom addresses for the 4-digit and 6-digit displays.
    pub fn with_addresses(i2c: I2C, four_digit: u8, six_digit: u8) -> Self {
        Self {
            i2c,
            addresses: [four_digit, six_digit],
            current: [None; 2],
        }
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }

    /// 7-bit I2C address used for `display`.
    pub fn address(&self, display: Display) -> u8 {
        self.addresses[display.index()]
    }

    /// Last current limit written to `display`, if known.
    pub fn current_limit(&self, display: Display) -> Option<CurrentLimit> {
        self.current[display.index()]
    }

    fn begin(&self, display: Display, reg: u8) -> Transaction {
        Transaction::register(self.address(display), reg)
    }

    /// Stage frame for `write`: DATA followed by one glyph per digit position.
    fn text_frame<G>(&self, display: Display, glyphs: G) -> Transaction
    where
        G: Iterator<Item = Glyph>,
    {
        let mut tx = self.begin(display, addr::DATA);
        glyphs
            .chain(core::iter::repeat(Glyph::BLANK))
            .take(display.digit_count())
            .for_each(|g| {
                tx.push_glyph(g);
            });
        tx
    }
}

impl<I2C> Reboot<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Force both displays to the maximum safe current (20 mA per segment).
    /// Call once before anything else.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        for display in Display::ALL {
            self.set_power_max(display)?;
        }
        Ok(())
    }

    fn send(&mut self, tx: Transaction) -> Result<(), Error<I2C::Error>> {
        tx.end(&mut self.i2c).map_err(Error::I2c)
    }

    /// Latch the staged data registers onto the display.
    fn commit(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        let mut tx = self.begin(display, addr::UPDATE_COLUMN);
        tx.push(DONT_CARE);
        self.send(tx)
    }

    /// Show `text` on `display`.
    ///
    /// One character per digit position; `M` and `W` take two digits.
    /// Missing positions are blank, extra characters are dropped and unsupported
    /// characters render blank.
    pub fn write(&mut self, display: Display, text: &str) -> Result<(), Error<I2C::Error>> {
        debug!("write {} {=str}", display, text);
        let tx = self.text_frame(display, text.chars().map(glyph_of));
        self.send(tx)?;
        self.commit(display)
    }

    /// Like [`Reboot::write`] for ASCII byte strings.
    pub fn write_bytes(&mut self, display: Display, text: &[u8]) -> Result<(), Error<I2C::Error>> {
        debug!("write {} {=[u8]}", display, text);
        let tx = self.text_frame(display, text.iter().copied().map(glyph_of_byte));
        self.send(tx)?;
        self.commit(display)
    }

    /// Blank every digit of `display`.
    pub fn clear(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        self.write(display, "")
    }

    /// Reset every register of `display` to its default, then restore the
    /// 20 mA current limit (the default is 40 mA).
    pub fn reset_display(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        debug!("reset {}", display);
        self.current[display.index()] = None;
        let mut tx = self.begin(display, addr::RESET);
        tx.push(DONT_CARE);
        self.send(tx)?;
        self.set_power_max(display)
    }

    /// Set LED brightness, 0..=100 percent, gamma corrected.
    pub fn set_brightness(
        &mut self,
        display: Display,
        percent: u8,
    ) -> Result<(), Error<I2C::Error>> {
        let pwm = brightness::correct(percent).ok_or(Error::OutOfRange)?;
        debug!("brightness {} {=u8}% -> pwm {=u8:#x}", display, percent, pwm);
        let mut tx = self.begin(display, addr::PWM);
        tx.push(pwm);
        self.send(tx)
    }

    /// 10 mA per segment.
    pub fn set_power_min(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        self.set_current_limit(display, CurrentLimit::Min10mA)
    }

    /// 20 mA per segment, the most these displays take.
    pub fn set_power_max(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        self.set_current_limit(display, CurrentLimit::Max20mA)
    }

    /// Write the lighting effect register and record the new setting.
    pub fn set_current_limit(
        &mut self,
        display: Display,
        limit: CurrentLimit,
    ) -> Result<(), Error<I2C::Error>> {
        debug!("current {} {=u8}mA", display, limit.milliamps());
        let mut tx = self.begin(display, addr::LIGHTING_EFFECT);
        tx.push(limit.bits());
        self.send(tx)?;
        self.current[display.index()] = Some(limit);
        Ok(())
    }
}

#[cfg(feature = "async")]
impl<I2C> Reboot<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Async version of [`Reboot::init`].
    pub async fn init_async(&mut self) -> Result<(), Error<I2C::Error>> {
        for display in Display::ALL {
            self.set_power_max_async(display).await?;
        }
        Ok(())
    }

    async fn send_async(&mut self, tx: Transaction) -> Result<(), Error<I2C::Error>> {
        tx.end_async(&mut self.i2c).await.map_err(Error::I2c)
    }

    async fn commit_async(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        let mut tx = self.begin(display, addr::UPDATE_COLUMN);
        tx.push(DONT_CARE);
        self.send_async(tx).await
    }

    pub async fn write_async(
        &mut self,
        display: Display,
        text: &str,
    ) -> Result<(), Error<I2C::Error>> {
        debug!("write {} {=str}", display, text);
        let tx = self.text_frame(display, text.chars().map(glyph_of));
        self.send_async(tx).await?;
        self.commit_async(display).await
    }

    pub async fn write_bytes_async(
        &mut self,
        display: Display,
        text: &[u8],
    ) -> Result<(), Error<I2C::Error>> {
        debug!("write {} {=[u8]}", display, text);
        let tx = self.text_frame(display, text.iter().copied().map(glyph_of_byte));
        self.send_async(tx).await?;
        self.commit_async(display).await
    }

    pub async fn clear_async(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        self.write_async(display, "").await
    }

    pub async fn reset_display_async(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        debug!("reset {}", display);
        self.current[display.index()] = None;
        let mut tx = self.begin(display, addr::RESET);
        tx.push(DONT_CARE);
        self.send_async(tx).await?;
        self.set_power_max_async(display).await
    }

    pub async fn set_brightness_async(
        &mut self,
        display: Display,
        percent: u8,
    ) -> Result<(), Error<I2C::Error>> {
        let pwm = brightness::correct(percent).ok_or(Error::OutOfRange)?;
        debug!("brightness {} {=u8}% -> pwm {=u8:#x}", display, percent, pwm);
        let mut tx = self.begin(display, addr::PWM);
        tx.push(pwm);
        self.send_async(tx).await
    }

    pub async fn set_power_min_async(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        self.set_current_limit_async(display, CurrentLimit::Min10mA).await
    }

    pub async fn set_power_max_async(&mut self, display: Display) -> Result<(), Error<I2C::Error>> {
        self.set_current_limit_async(display, CurrentLimit::Max20mA).await
    }

    pub async fn set_current_limit_async(
        &mut self,
        display: Display,
        limit: CurrentLimit,
    ) -> Result<(), Error<I2C::Error>> {
        debug!("current {} {=u8}mA", display, limit.milliamps());
        let mut tx = self.begin(display, addr::LIGHTING_EFFECT);
        tx.push(limit.bits());
        self.send_async(tx).await?;
        self.current[display.index()] = Some(limit);
        Ok(())
    }
}
