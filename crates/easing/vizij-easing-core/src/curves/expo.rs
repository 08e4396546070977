//! Exponential easings.
//!
//! `2^x` never reaches its asymptote, so the curves carry small offsets
//! (`0.001`, `1.001`, `0.0005`, `1.0005`) and the exact endpoints are
//! special-cased. `in_expo` still stops 0.1% short of `b + c` at `t == d`.

use crate::error::InvalidTimeError;
use crate::float::EaseFloat;
use crate::forms::{calling_forms, check_time, out_in};

#[inline]
pub fn in_expo<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    if t == F::zero() {
        return Ok(b);
    }
    Ok(c * (F::lit(10.0) * (t / d - F::one())).exp2() + b - c * F::lit(0.001))
}

#[inline]
pub fn out_expo<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    if t == d {
        return Ok(b + c);
    }
    Ok(c * F::lit(1.001) * (-(F::lit(-10.0) * t / d).exp2() + F::one()) + b)
}

/// The second half is scaled by `1.0005`, not `0.9995`: at `t' -> 1` it
/// reaches `c/2 * 1.0005 * (2 - 2^-10) ~= c`, so the curve meets `b + c`
/// before the `t == d` special case. `0.9995` would stop about `0.001 * c`
/// short and then jump.
#[inline]
pub fn in_out_expo<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    if t == F::zero() {
        return Ok(b);
    }
    if t == d {
        return Ok(b + c);
    }
    let one = F::one();
    let two = F::lit(2.0);
    let ten = F::lit(10.0);
    let t = t / d * two;
    if t < one {
        Ok(c / two * (ten * (t - one)).exp2() + b - c * F::lit(0.0005))
    } else {
        let t = t - one;
        Ok(c / two * F::lit(1.0005) * (-(-ten * t).exp2() + two) + b)
    }
}

#[inline]
pub fn out_in_expo<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_expo, in_expo, t, b, c, d)
}

calling_forms! {
    in_expo => in_expo_unit, in_expo_range;
    out_expo => out_expo_unit, out_expo_range;
    in_out_expo => in_out_expo_unit, in_out_expo_range;
    out_in_expo => out_in_expo_unit, out_in_expo_range;
}
