// src/encode/rc/encoder.rs

use crate::utils::error::{CodecError, Result};
use std::io::Write;

/// Upper bound of the coding interval right after renormalization.
pub(crate) const RANGE_TOP: u32 = 0xFF00;
/// The interval is renormalized whenever it shrinks below this width.
pub(crate) const RANGE_BOTTOM: u32 = 0x100;

/// Splits `range` into the width of the `1` subinterval.
///
/// Shared by encoder and decoder: both must truncate identically or the
/// streams desynchronize. The result always satisfies `1 <= r1 < range`.
#[inline(always)]
pub(crate) fn split(range: u32, probability: f64) -> u32 {
    let scaled = (range as f64 * probability) as u32;
    scaled.min(range - 1).max(1)
}

/// A byte-oriented binary range encoder.
///
/// `low` is a 16-bit window onto the code value plus one carry bit. Bytes
/// leave the window one at a time; the most recent one is held back in
/// `pending` until it is known whether a later carry will increment it, and
/// a run of bytes whose fate is still open is counted in `pending_run`.
pub struct RangeEncoder<W: Write> {
    writer: Option<W>,
    low: u32,
    range: u32,
    pending: Option<u8>,
    pending_run: u32,
    bytes_written: u64,
    finished: bool,
}

impl<W: Write> RangeEncoder<W> {
    /// Creates a new encoder that writes to the given writer.
    pub fn new(writer: W) -> Self {
        RangeEncoder {
            writer: Some(writer),
            low: 0,
            range: RANGE_TOP,
            pending: None,
            pending_run: 0,
            bytes_written: 0,
            finished: false,
        }
    }

    /// Encodes `bit`, where `probability` is the chance of the bit being 1.
    ///
    /// The `1` symbol owns the top `split(range, probability)` of the
    /// interval, the `0` symbol the rest.
    #[inline]
    pub fn put(&mut self, bit: bool, probability: f64) -> Result<()> {
        if self.finished {
            return Err(CodecError::Finished);
        }
        let range1 = split(self.range, probability);
        debug_assert!(range1 > 0 && range1 < self.range);
        if bit {
            self.low += self.range - range1;
            self.range = range1;
        } else {
            self.range -= range1;
        }
        self.renorm()
    }

    fn renorm(&mut self) -> Result<()> {
        while self.range < RANGE_BOTTOM {
            match self.pending {
                None => {
                    self.pending = Some((self.low >> 8) as u8);
                }
                Some(held) if self.low <= 0xFF00 => {
                    // No carry can reach the held byte any more.
                    self.emit(held)?;
                    for _ in 0..self.pending_run {
                        self.emit(0xFF)?;
                    }
                    self.pending_run = 0;
                    self.pending = Some((self.low >> 8) as u8);
                }
                Some(held) if self.low >= 0x10000 => {
                    // Carry: increment the held byte, the 0xFF run wraps to 0x00.
                    self.emit(held.wrapping_add(1))?;
                    for _ in 0..self.pending_run {
                        self.emit(0x00)?;
                    }
                    self.pending_run = 0;
                    self.pending = Some(((self.low >> 8) & 0xFF) as u8);
                }
                Some(_) => {
                    // High byte is 0xFF: undecided until a later carry or not.
                    self.pending_run += 1;
                }
            }
            self.low = (self.low & 0xFF) << 8;
            self.range <<= 8;
        }
        Ok(())
    }

    #[inline]
    fn emit(&mut self, byte: u8) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.write_all(&[byte])?;
            self.bytes_written += 1;
        }
        Ok(())
    }

    /// Pushes the final interval position out so the decoder can resolve
    /// every coded bit. The last held byte is left unwritten; the decoder
    /// reads zeros past the end, which lands inside the final interval.
    fn flush(&mut self) -> Result<()> {
        self.range = 0xFF;
        self.low += 0xFF;
        self.renorm()?;
        self.range = 0xFF;
        self.renorm()
    }

    /// Number of bytes handed to the writer so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flushes the final interval. Later calls to [`put`](Self::put) fail.
    pub fn close(&mut self) -> Result<()> {
        if !self.finished {
            self.flush()?;
            self.finished = true;
        }
        Ok(())
    }

    /// Finalizes encoding and returns the writer.
    pub fn finish(mut self) -> Result<W> {
        self.close()?;
        self.writer.take().ok_or(CodecError::Finished)
    }
}

impl<W: Write> Drop for RangeEncoder<W> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.flush();
        }
    }
}
