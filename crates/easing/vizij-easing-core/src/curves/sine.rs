//! Sinusoidal easings.

use crate::error::InvalidTimeError;
use crate::float::EaseFloat;
use crate::forms::{calling_forms, check_time, out_in};

#[inline]
pub fn in_sine<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    Ok(-c * (t / d * (F::PI() / F::lit(2.0))).cos() + c + b)
}

#[inline]
pub fn out_sine<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    Ok(c * (t / d * (F::PI() / F::lit(2.0))).sin() + b)
}

#[inline]
pub fn in_out_sine<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    Ok(-c / F::lit(2.0) * ((F::PI() * t / d).cos() - F::one()) + b)
}

#[inline]
pub fn out_in_sine<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_sine, in_sine, t, b, c, d)
}

calling_forms! {
    in_sine => in_sine_unit, in_sine_range;
    out_sine => out_sine_unit, out_sine_range;
    in_out_sine => in_out_sine_unit, in_out_sine_range;
    out_in_sine => out_in_sine_unit, out_in_sine_range;
}
