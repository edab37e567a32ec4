//! One addressed write on the bus: START, address, queued bytes, STOP.

use crate::data_types::{Display, Glyph};

/// Register index plus six double-width glyphs.
pub const MAX_FRAME_LEN: usize = 1 + 2 * crate::registers::SIX_DIGIT_COUNT;

/// Default bus address for a display: 0x63 for the 4-digit unit, 0x60 otherwise.
pub const fn resolve_address(display: Display) -> u8 {
    display.address()
}

/// Bytes queued for a single device. Opened by [`Transaction::begin`], consumed
/// by [`Transaction::end`], so at most one is ever in flight per operation.
#[derive(Debug)]
pub(crate) struct Transaction {
    address: u8,
    buf: [u8; MAX_FRAME_LEN],
    len: usize,
}

impl Transaction {
    /// Open a transaction addressed to `address`.
    pub fn begin(address: u8) -> Self {
        Self {
            address,
            buf: [0u8; MAX_FRAME_LEN],
            len: 0,
        }
    }

    /// Open a transaction starting with a register index.
    pub fn register(address: u8, reg: u8) -> Self {
        let mut tx = Self::begin(address);
        tx.push(reg);
        tx
    }

    /// Queue one byte. Returns `false`, queuing nothing, once the frame holds
    /// [`MAX_FRAME_LEN`] bytes.
    pub fn push(&mut self, byte: u8) -> bool {
        match self.buf.get_mut(self.len) {
            Some(slot) => {
                *slot = byte;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Queue the segment bytes of a glyph. A glyph that does not fit is not
    /// queued at all and `false` is returned.
    pub fn push_glyph(&mut self, glyph: Glyph) -> bool {
        if self.len + glyph.width() > MAX_FRAME_LEN {
            return false;
        }
        self.len += glyph.encode(&mut self.buf[self.len..]);
        true
    }

    /// Bytes queued so far, in issuance order.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Deliver the queued bytes as one write and close the transaction.
    pub fn end<I2C>(self, i2c: &mut I2C) -> Result<(), I2C::Error>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        trace!("i2c {=u8:#x} <- {=[u8]:x}", self.address, self.bytes());
        i2c.write(self.address, self.bytes()).inspect_err(|_| {
            warn!("i2c write to {=u8:#x} failed", self.address);
        })
    }

    /// Async version of [`Transaction::end`].
    #[cfg(feature = "async")]
    pub async fn end_async<I2C>(self, i2c: &mut I2C) -> Result<(), I2C::Error>
    where
        I2C: embedded_hal_async::i2c::I2c,
    {
        trace!("i2c {=u8:#x} <- {=[u8]:x}", self.address, self.bytes());
        i2c.write(self.address, self.bytes()).await.inspect_err(|_| {
            warn!("i2c write to {=u8:#x} failed", self.address);
        })
    }
}
