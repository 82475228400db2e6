// src/encode/rc/decoder.rs

use super::encoder::{split, RANGE_BOTTOM, RANGE_TOP};

/// Pull source of coded bytes.
///
/// Sources never fail: once exhausted they keep supplying zero bytes.
pub trait ByteSource {
    fn next_byte(&mut self) -> u8;
}

/// Reads bytes from a slice, padding with zeros past the end.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
    overrun: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        SliceSource {
            data,
            pos: 0,
            overrun: 0,
        }
    }

    /// Bytes consumed from the slice so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Zero bytes synthesized after the slice ran out.
    pub fn overrun(&self) -> usize {
        self.overrun
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn next_byte(&mut self) -> u8 {
        match self.data.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                b
            }
            None => {
                self.overrun += 1;
                0
            }
        }
    }
}

/// Decoder counterpart of [`RangeEncoder`](super::encoder::RangeEncoder).
///
/// `low` holds the offset of the code value from the bottom of the current
/// interval, so each decision is a single comparison.
pub struct RangeDecoder<S: ByteSource> {
    source: S,
    low: u32,
    range: u32,
}

impl<S: ByteSource> RangeDecoder<S> {
    /// Primes the decoder with the first two bytes of the source.
    pub fn new(mut source: S) -> Self {
        let hi = source.next_byte() as u32;
        let lo = source.next_byte() as u32;
        RangeDecoder {
            source,
            low: (hi << 8) | lo,
            range: RANGE_TOP,
        }
    }

    /// Decodes one bit; `probability` is the chance of the bit being 1 and
    /// must match what the encoder used for this position.
    #[inline]
    pub fn get(&mut self, probability: f64) -> bool {
        let range1 = split(self.range, probability);
        self.range -= range1;
        let bit = if self.low < self.range {
            false
        } else {
            self.low -= self.range;
            self.range = range1;
            true
        };
        self.refill();
        bit
    }

    // One shift always suffices: the interval never drops below one unit.
    #[inline]
    fn refill(&mut self) {
        if self.range < RANGE_BOTTOM {
            self.range <<= 8;
            self.low = (self.low << 8) | self.source.next_byte() as u32;
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl RangeDecoder<SliceSource<'_>> {
    /// Zero bytes the decoder had to invent after its input ran out.
    pub fn overrun(&self) -> usize {
        self.source.overrun()
    }
}
