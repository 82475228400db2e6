// src/encode/llc/rows.rs

/// Three rows of transformed samples reused as a ring.
///
/// Slot `y % 3` holds row `y` once it has been processed, so while row `y` is
/// being coded the other two slots hold rows `y - 1` and `y - 2`.
#[derive(Debug, Clone)]
pub struct RowRing {
    rows: [Vec<i16>; 3],
}

impl RowRing {
    /// Allocates three zeroed rows of `row_len` samples each.
    pub fn new(row_len: usize) -> Self {
        RowRing {
            rows: [vec![0; row_len], vec![0; row_len], vec![0; row_len]],
        }
    }

    pub fn row_len(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns `(current, previous, previous-previous)` for row `y`.
    ///
    /// Contents of the older rows are meaningless for `y < 1` and `y < 2`; the
    /// neighborhood fallbacks never read them there.
    pub fn lines_mut(&mut self, y: usize) -> (&mut [i16], &[i16], &[i16]) {
        let [a, b, c] = &mut self.rows;
        match y % 3 {
            0 => (a.as_mut_slice(), c.as_slice(), b.as_slice()),
            1 => (b.as_mut_slice(), a.as_slice(), c.as_slice()),
            _ => (c.as_mut_slice(), b.as_slice(), a.as_slice()),
        }
    }
}
