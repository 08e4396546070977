//! Bounce easings. `out_bounce` is four parabolic arcs split at
//! `1/2.75`, `2/2.75` and `2.5/2.75`; the other forms are built from it.

use crate::error::InvalidTimeError;
use crate::float::EaseFloat;
use crate::forms::{calling_forms, check_time, out_in};

#[inline]
pub fn out_bounce<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let k = F::lit(7.5625);
    let w = F::lit(2.75);
    let t = t / d;
    if t < F::one() / w {
        Ok(c * (k * t * t) + b)
    } else if t < F::lit(2.0) / w {
        let t = t - (F::lit(1.5) / w);
        Ok(c * (k * t * t + F::lit(0.75)) + b)
    } else if t < F::lit(2.5) / w {
        let t = t - (F::lit(2.25) / w);
        Ok(c * (k * t * t + F::lit(0.9375)) + b)
    } else {
        let t = t - (F::lit(2.625) / w);
        Ok(c * (k * t * t + F::lit(0.984375)) + b)
    }
}

/// Mirror of [`out_bounce`]: `c - out_bounce(d - t, 0, c, d) + b`.
///
/// Negative `t` makes the mirrored time exceed `d`, which the inner call
/// rejects.
#[inline]
pub fn in_bounce<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    Ok(c - out_bounce(d - t, F::zero(), c, d)? + b)
}

#[inline]
pub fn in_out_bounce<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let two = F::lit(2.0);
    let half = F::lit(0.5);
    if t < d / two {
        Ok(in_bounce(t * two, F::zero(), c, d)? * half + b)
    } else {
        Ok(out_bounce(t * two - d, F::zero(), c, d)? * half + c * half + b)
    }
}

#[inline]
pub fn out_in_bounce<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_bounce, in_bounce, t, b, c, d)
}

calling_forms! {
    in_bounce => in_bounce_unit, in_bounce_range;
    out_bounce => out_bounce_unit, out_bounce_range;
    in_out_bounce => in_out_bounce_unit, in_out_bounce_range;
    out_in_bounce => out_in_bounce_unit, out_in_bounce_range;
}
