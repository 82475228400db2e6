// src/encode/rc/model.rs
//! Adaptive per-context bit probabilities.
//!
//! The model holds one state byte per (context, bit position) pair and maps
//! it to a probability through the fixed tables in [`super::table`]. It knows
//! nothing about the arithmetic coder; callers feed the probability to the
//! coder and report the coded bit back through [`ContextModel::update`].

use super::table::{MPS_PROBABILITY, NEXT_STATE_LPS, NEXT_STATE_MPS};

/// Number of bit positions a symbol can use (zero flag, exponent, mantissa, sign).
pub const BIT_POSITIONS: usize = 8;

/// Selects how many neighborhood features feed the context hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSize {
    /// Three local gradients only.
    Compact,
    /// Gradients plus two-pixel-distance horizontal and vertical terms.
    #[default]
    Extended,
}

impl ModelSize {
    /// Number of folded (non-negative) contexts the model allocates.
    pub const fn contexts(self) -> usize {
        match self {
            ModelSize::Compact => (11 * 11 * 11 + 1) / 2,
            ModelSize::Extended => (11 * 11 * 11 * 5 * 5 + 1) / 2,
        }
    }

    /// Whether the context hash includes the `quant5` terms.
    pub const fn is_extended(self) -> bool {
        self.contexts() > 666
    }
}

/// State table for every (context, bit position) pair.
#[derive(Debug, Clone)]
pub struct ContextModel {
    contexts: usize,
    positions: usize,
    states: Vec<u8>,
}

impl ContextModel {
    /// Allocates a zeroed model (every state starts at p = 0.5156 for `0`).
    pub fn new(contexts: usize, positions: usize) -> Self {
        assert!(contexts > 0 && positions > 0);
        ContextModel {
            contexts,
            positions,
            states: vec![0; contexts * positions],
        }
    }

    pub fn with_size(size: ModelSize) -> Self {
        Self::new(size.contexts(), BIT_POSITIONS)
    }

    pub fn contexts(&self) -> usize {
        self.contexts
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    // Out-of-range indices are clamped to the last slot rather than rejected.
    #[inline(always)]
    fn index(&self, context: usize, bitpos: usize) -> usize {
        context.min(self.contexts - 1) * self.positions + bitpos.min(self.positions - 1)
    }

    /// Raw state for a slot.
    pub fn state(&self, context: usize, bitpos: usize) -> u8 {
        self.states[self.index(context, bitpos)]
    }

    /// Probability that the next bit in this slot is `1`.
    #[inline]
    pub fn p(&self, context: usize, bitpos: usize) -> f64 {
        let state = self.states[self.index(context, bitpos)];
        let p_mps = MPS_PROBABILITY[(state >> 1) as usize];
        if state & 1 == 1 { p_mps } else { 1.0 - p_mps }
    }

    /// Moves the slot's state after `bit` was coded.
    #[inline]
    pub fn update(&mut self, context: usize, bitpos: usize, bit: bool) {
        let i = self.index(context, bitpos);
        let state = self.states[i];
        self.states[i] = if (state & 1 == 1) == bit {
            NEXT_STATE_MPS[state as usize]
        } else {
            NEXT_STATE_LPS[state as usize]
        };
    }

    /// Returns every state to zero.
    pub fn reset(&mut self) {
        self.states.fill(0);
    }
}
