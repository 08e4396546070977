//! Circular easings.

use crate::error::InvalidTimeError;
use crate::float::EaseFloat;
use crate::forms::{calling_forms, check_time, out_in};

#[inline]
pub fn in_circ<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let one = F::one();
    let t = t / d;
    Ok(-c * ((one - t * t).sqrt() - one) + b)
}

#[inline]
pub fn out_circ<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d - F::one();
    Ok(c * (F::one() - t * t).sqrt() + b)
}

#[inline]
pub fn in_out_circ<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let one = F::one();
    let two = F::lit(2.0);
    let t = t / d * two;
    if t < one {
        Ok(-c / two * ((one - t * t).sqrt() - one) + b)
    } else {
        let t = t - two;
        Ok(c / two * ((one - t * t).sqrt() + one) + b)
    }
}

#[inline]
pub fn out_in_circ<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_circ, in_circ, t, b, c, d)
}

calling_forms! {
    in_circ => in_circ_unit, in_circ_range;
    out_circ => out_circ_unit, out_circ_range;
    in_out_circ => in_out_circ_unit, in_out_circ_range;
    out_in_circ => out_in_circ_unit, out_in_circ_range;
}
