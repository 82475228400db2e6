//! Integer residual coding as a sequence of modeled binary decisions.
//!
//! A value is sent as a zero flag, a unary exponent, the mantissa bits below
//! the leading one, and optionally a sign. Each decision is tagged with a bit
//! position so the caller can keep separate statistics for each role:
//!
//! | position | decision |
//! |---|---|
//! | 0 | value is zero |
//! | 1..=4 | exponent continue/stop (4 is shared by all later exponent bits) |
//! | 5..=6 | mantissa bits (6 is shared by all later mantissa bits) |
//! | 7 | sign (1 = negative) |

use crate::utils::error::{CodecError, Result};

const ZERO_POS: usize = 0;
const EXPONENT_POS: usize = 1;
const EXPONENT_LAST: usize = 4;
const MANTISSA_POS: usize = 5;
const MANTISSA_LAST: usize = 6;
const SIGN_POS: usize = 7;

/// Longest exponent a well-formed stream can announce.
const MAX_EXPONENT: u32 = 31;

/// Encodes `value`, handing every decision to `put(bitpos, bit)`.
///
/// With `signed == false` only the magnitude is coded.
pub fn put_symbol<F>(value: i32, signed: bool, put: &mut F) -> Result<()>
where
    F: FnMut(usize, bool) -> Result<()>,
{
    if value == 0 {
        return put(ZERO_POS, true);
    }
    put(ZERO_POS, false)?;

    let magnitude = value.unsigned_abs();
    let exponent = magnitude.ilog2() as usize;

    let mut ctx = EXPONENT_POS;
    for _ in 0..exponent {
        put(ctx.min(EXPONENT_LAST), true)?;
        ctx += 1;
    }
    put(ctx.min(EXPONENT_LAST), false)?;

    let mut ctx = MANTISSA_POS;
    for i in (0..exponent).rev() {
        put(ctx.min(MANTISSA_LAST), (magnitude >> i) & 1 == 1)?;
        ctx += 1;
    }

    if signed {
        put(SIGN_POS, value < 0)?;
    }
    Ok(())
}

/// Decodes a value produced by [`put_symbol`], pulling decisions from
/// `get(bitpos)`.
///
/// Returns [`CodecError::InvalidExponent`] if more than 31 exponent bits are
/// announced, which only a corrupt stream can do.
pub fn get_symbol<F>(signed: bool, get: &mut F) -> Result<i32>
where
    F: FnMut(usize) -> bool,
{
    if get(ZERO_POS) {
        return Ok(0);
    }

    let mut exponent = 0u32;
    let mut ctx = EXPONENT_POS;
    while get(ctx.min(EXPONENT_LAST)) {
        ctx += 1;
        exponent += 1;
        if exponent > MAX_EXPONENT {
            return Err(CodecError::InvalidExponent);
        }
    }

    let mut value: u32 = 1;
    let mut ctx = MANTISSA_POS;
    for _ in 0..exponent {
        let bit = get(ctx.min(MANTISSA_LAST)) as u32;
        value = value.wrapping_add(value).wrapping_add(bit);
        ctx += 1;
    }

    let value = value as i32;
    if signed && get(SIGN_POS) {
        Ok(value.wrapping_neg())
    } else {
        Ok(value)
    }
}
