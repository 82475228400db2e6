//! Cooperative yield points for long-running encode/decode sessions.
//!
//! A session calls its hook every `yield_period` pixels so a single-threaded
//! host can service other work. The hook never influences the bitstream:
//! output is identical with or without it.

/// How far a session has progressed at a yield point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub pixels_done: u64,
    pub pixels_total: u64,
}

impl Progress {
    /// Fraction of the image processed so far, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.pixels_total == 0 {
            1.0
        } else {
            self.pixels_done as f64 / self.pixels_total as f64
        }
    }
}

/// Scheduling hook invoked at yield points.
pub trait YieldHook {
    fn on_yield(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> YieldHook for F {
    fn on_yield(&mut self, progress: Progress) {
        self(progress)
    }
}

/// A hook that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoYield;

impl YieldHook for NoYield {
    fn on_yield(&mut self, _progress: Progress) {}
}

/// Counts processed pixels and fires the hook once per period.
pub(crate) struct YieldCounter {
    period: Option<u32>,
    since_last: u32,
    done: u64,
    total: u64,
}

impl YieldCounter {
    pub(crate) fn new(period: Option<u32>, total: u64) -> Self {
        Self {
            period: period.filter(|&p| p > 0),
            since_last: 0,
            done: 0,
            total,
        }
    }

    /// Records one pixel and yields if the period has elapsed.
    #[inline]
    pub(crate) fn tick(&mut self, hook: &mut dyn YieldHook) {
        self.done += 1;
        let Some(period) = self.period else {
            return;
        };
        self.since_last += 1;
        if self.since_last == period {
            self.since_last = 0;
            log::trace!("yield at {}/{} pixels", self.done, self.total);
            hook.on_yield(Progress {
                pixels_done: self.done,
                pixels_total: self.total,
            });
        }
    }
}
