// src/encode/llc/context.rs

//! Causal neighborhood, median prediction and gradient context hashing.
//!
//! For every sample the coder looks at six already-coded neighbors in the
//! same channel:
//!
//! ```text
//!         tt
//!     tl  t   tr
//! ll  l   X
//! ```
//!
//! The prediction is the median of `l`, `t` and the planar estimate
//! `l + t - tl`. The context is a hash of quantized local gradients.

/// Five-level gradient quantizer, indexed by `clamp(x, -128, 127) as u8`.
#[rustfmt::skip]
static QUANT5: [i8; 256] = [
    0, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
    -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -1, -1, -1,
];

/// Eleven-level gradient quantizer, indexed like [`QUANT5`].
#[rustfmt::skip]
static QUANT11: [i8; 256] = [
    0, 1, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -4, -4,
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,
    -4, -4, -4, -4, -4, -3, -3, -3, -3, -3, -3, -3, -2, -2, -2, -1,
];

#[inline(always)]
fn table_index(x: i32) -> usize {
    (x.clamp(-128, 127) & 0xFF) as usize
}

/// Buckets a gradient into `-2..=2`.
#[inline]
pub fn quant5(x: i32) -> i32 {
    QUANT5[table_index(x)] as i32
}

/// Buckets a gradient into `-5..=5`.
#[inline]
pub fn quant11(x: i32) -> i32 {
    QUANT11[table_index(x)] as i32
}

/// Median of three values.
#[inline]
pub fn median(a: i32, mut b: i32, c: i32) -> i32 {
    if a > b {
        if c > b {
            b = if c > a { a } else { c };
        }
    } else if b > c {
        b = if c > a { c } else { a };
    }
    b
}

/// Position of the sample being coded.
#[derive(Debug, Clone, Copy)]
pub struct ScanPos {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub channels: usize,
}

/// The causal neighbors of one sample, edge fallbacks already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub l: i32,
    pub t: i32,
    pub tl: i32,
    pub tr: i32,
    pub ll: i32,
    pub tt: i32,
}

impl Neighborhood {
    /// Reads the neighbors of channel `channel` at `pos` from the current row
    /// and the two rows above it.
    ///
    /// Missing neighbors fall back to the nearest available one; a sample with
    /// no neighbors at all sees the mid-level value 128.
    #[inline]
    pub fn gather(
        cur: &[i16],
        prev: &[i16],
        prev2: &[i16],
        pos: ScanPos,
        channel: usize,
    ) -> Self {
        let ScanPos { x, y, width, channels } = pos;
        let s = x * channels + channel;

        let l = if x > 0 {
            cur[s - channels] as i32
        } else if y > 0 {
            prev[s] as i32
        } else {
            128
        };
        let t = if y > 0 { prev[s] as i32 } else { l };
        let ll = if x > 1 { cur[s - 2 * channels] as i32 } else { l };
        let tl = if y > 0 && x > 0 { prev[s - channels] as i32 } else { t };
        let tr = if y > 0 && x + 1 < width { prev[s + channels] as i32 } else { t };
        let tt = if y > 1 { prev2[s] as i32 } else { t };

        Neighborhood { l, t, tl, tr, ll, tt }
    }

    /// Median prediction for the sample.
    #[inline]
    pub fn predict(&self) -> i32 {
        median(self.l, self.l + self.t - self.tl, self.t)
    }

    /// Signed context hash. Mirrored gradients produce negated hashes.
    #[inline]
    pub fn context_hash(&self, extended: bool) -> i32 {
        let mut hash = quant11(self.l - self.tl)
            + quant11(self.tl - self.t) * 11
            + quant11(self.t - self.tr) * (11 * 11);
        if extended {
            hash += quant5(self.ll - self.l) * (5 * 11 * 11)
                + quant5(self.tt - self.t) * (5 * 5 * 11 * 11);
        }
        hash
    }
}

/// Folds a signed hash onto its absolute value. The flag tells the caller to
/// negate the residual so that mirrored contexts share statistics.
#[inline]
pub fn fold_context(hash: i32) -> (usize, bool) {
    (hash.unsigned_abs() as usize, hash < 0)
}
