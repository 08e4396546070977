//! Back easings: overshoot past the target, then settle.
//!
//! `overshoot` defaults to [`DEFAULT_OVERSHOOT`] (about 10% overshoot); the
//! in-out form scales it by `1.525`.

use crate::config::DEFAULT_OVERSHOOT;
use crate::error::InvalidTimeError;
use crate::float::EaseFloat;
use crate::forms::{calling_forms, check_time, out_in};

#[inline]
fn overshoot_or_default<F: EaseFloat>(overshoot: Option<F>) -> F {
    overshoot.unwrap_or_else(|| F::lit(DEFAULT_OVERSHOOT))
}

pub fn in_back<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    overshoot: Option<F>,
) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let s = overshoot_or_default(overshoot);
    let t = t / d;
    Ok(c * t * t * ((s + F::one()) * t - s) + b)
}

pub fn out_back<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    overshoot: Option<F>,
) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let one = F::one();
    let s = overshoot_or_default(overshoot);
    let t = t / d - one;
    Ok(c * (t * t * ((s + one) * t + s) + one) + b)
}

pub fn in_out_back<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    overshoot: Option<F>,
) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let one = F::one();
    let two = F::lit(2.0);
    let s = overshoot_or_default(overshoot) * F::lit(1.525);
    let t = t / d * two;
    if t < one {
        Ok(c / two * (t * t * ((s + one) * t - s)) + b)
    } else {
        let t = t - two;
        Ok(c / two * (t * t * ((s + one) * t + s) + two) + b)
    }
}

pub fn out_in_back<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    overshoot: Option<F>,
) -> Result<F, InvalidTimeError> {
    out_in(
        |t, b, c, d| out_back(t, b, c, d, overshoot),
        |t, b, c, d| in_back(t, b, c, d, overshoot),
        t,
        b,
        c,
        d,
    )
}

calling_forms! {
    in_back(None) => in_back_unit, in_back_range;
    out_back(None) => out_back_unit, out_back_range;
    in_out_back(None) => in_out_back_unit, in_out_back_range;
    out_in_back(None) => out_in_back_unit, out_in_back_range;
}
