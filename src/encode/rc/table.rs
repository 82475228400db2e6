// src/encode/rc/table.rs

//! Fixed state machine driving the adaptive bit probabilities.
//!
//! A state is a 7-bit value: the low bit is the current most probable symbol
//! (MPS), the upper six bits index `MPS_PROBABILITY`. Coding the MPS moves to
//! `NEXT_STATE_MPS[state]` (more confident), coding the other symbol moves to
//! `NEXT_STATE_LPS[state]` (less confident, possibly flipping the MPS).

/// Number of distinct adaptive states.
pub const STATE_COUNT: usize = 128;

/// Next state after coding the most probable symbol.
pub const NEXT_STATE_MPS: [u8; STATE_COUNT] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51,
    52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75,
    76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99,
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118,
    119, 120, 121, 122, 123, 124, 125, 124, 125, 126, 127,
];

/// Next state after coding the least probable symbol.
pub const NEXT_STATE_LPS: [u8; STATE_COUNT] = [
    1, 0, 0, 1, 2, 3, 4, 5, 4, 5, 8, 9, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 18, 19, 22,
    23, 22, 23, 24, 25, 26, 27, 26, 27, 30, 31, 30, 31, 32, 33, 32, 33, 36, 37, 36, 37, 38, 39, 38,
    39, 42, 43, 42, 43, 44, 45, 44, 45, 46, 47, 48, 49, 48, 49, 50, 51, 52, 53, 52, 53, 54, 55, 54,
    55, 56, 57, 58, 59, 58, 59, 60, 61, 60, 61, 60, 61, 62, 63, 64, 65, 64, 65, 66, 67, 66, 67, 66,
    67, 68, 69, 68, 69, 70, 71, 70, 71, 70, 71, 72, 73, 72, 73, 72, 73, 74, 75, 74, 75, 74, 75, 76,
    77, 76, 77, 126, 127,
];

/// Probability of the most probable symbol, indexed by `state >> 1`.
pub const MPS_PROBABILITY: [f64; STATE_COUNT / 2] = [
    0.5156, 0.5405, 0.5615, 0.5825, 0.6016, 0.6207, 0.6398, 0.6570,
    0.6723, 0.6875, 0.7028, 0.7162, 0.7295, 0.7410, 0.7525, 0.7639,
    0.7754, 0.7849, 0.7945, 0.8040, 0.8117, 0.8212, 0.8289, 0.8365,
    0.8422, 0.8499, 0.8556, 0.8613, 0.8671, 0.8728, 0.8785, 0.8823,
    0.8881, 0.8919, 0.8957, 0.8995, 0.9033, 0.9072, 0.9110, 0.9148,
    0.9167, 0.9205, 0.9224, 0.9263, 0.9282, 0.9301, 0.9320, 0.9339,
    0.9358, 0.9377, 0.9396, 0.9415, 0.9434, 0.9454, 0.9473, 0.9473,
    0.9492, 0.9511, 0.9511, 0.9530, 0.9530, 0.9549, 0.9568, 0.9702,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_stay_in_range() {
        for s in 0..STATE_COUNT {
            assert!((NEXT_STATE_MPS[s] as usize) < STATE_COUNT);
            assert!((NEXT_STATE_LPS[s] as usize) < STATE_COUNT);
        }
    }

    #[test]
    fn test_mps_transition_keeps_parity() {
        for s in 0..STATE_COUNT {
            assert_eq!(NEXT_STATE_MPS[s] & 1, s as u8 & 1, "state {}", s);
        }
    }

    #[test]
    fn test_probabilities_open_interval_and_sorted() {
        for w in MPS_PROBABILITY.windows(2) {
            assert!(w[0] <= w[1]);
        }
        for &p in MPS_PROBABILITY.iter() {
            assert!(p > 0.5 && p < 1.0);
        }
    }
}
