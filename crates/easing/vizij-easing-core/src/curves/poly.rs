//! Linear and polynomial easings (quad, cubic, quart, quint).

use crate::error::InvalidTimeError;
use crate::float::EaseFloat;
use crate::forms::{calling_forms, check_time, out_in};

/// No easing: `c * t / d + b`.
#[inline]
pub fn linear<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    Ok(c * t / d + b)
}

// =============================================================================
// Quadratic
// =============================================================================

#[inline]
pub fn in_quad<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d;
    Ok(c * (t * t) + b)
}

#[inline]
pub fn out_quad<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d;
    Ok(-c * t * (t - F::lit(2.0)) + b)
}

#[inline]
pub fn in_out_quad<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let one = F::one();
    let two = F::lit(2.0);
    let t = t / d * two;
    if t < one {
        Ok(c / two * (t * t) + b)
    } else {
        Ok(-c / two * ((t - one) * (t - F::lit(3.0)) - one) + b)
    }
}

#[inline]
pub fn out_in_quad<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_quad, in_quad, t, b, c, d)
}

// =============================================================================
// Cubic
// =============================================================================

#[inline]
pub fn in_cubic<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d;
    Ok(c * (t * t * t) + b)
}

#[inline]
pub fn out_cubic<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d - F::one();
    Ok(c * (t * t * t + F::one()) + b)
}

#[inline]
pub fn in_out_cubic<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let two = F::lit(2.0);
    let t = t / d * two;
    if t < F::one() {
        Ok(c / two * t * t * t + b)
    } else {
        let t = t - two;
        Ok(c / two * (t * t * t + two) + b)
    }
}

#[inline]
pub fn out_in_cubic<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_cubic, in_cubic, t, b, c, d)
}

// =============================================================================
// Quartic
// =============================================================================

#[inline]
pub fn in_quart<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d;
    Ok(c * (t * t * t * t) + b)
}

#[inline]
pub fn out_quart<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d - F::one();
    Ok(-c * ((t * t * t * t) - F::one()) + b)
}

#[inline]
pub fn in_out_quart<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let two = F::lit(2.0);
    let t = t / d * two;
    if t < F::one() {
        Ok(c / two * (t * t * t * t) + b)
    } else {
        let t = t - two;
        Ok(-c / two * ((t * t * t * t) - two) + b)
    }
}

#[inline]
pub fn out_in_quart<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_quart, in_quart, t, b, c, d)
}

// =============================================================================
// Quintic
// =============================================================================

#[inline]
pub fn in_quint<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d;
    Ok(c * (t * t * t * t * t) + b)
}

#[inline]
pub fn out_quint<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let t = t / d - F::one();
    Ok(c * ((t * t * t * t * t) + F::one()) + b)
}

#[inline]
pub fn in_out_quint<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    let two = F::lit(2.0);
    let t = t / d * two;
    if t < F::one() {
        Ok(c / two * (t * t * t * t * t) + b)
    } else {
        let t = t - two;
        Ok(c / two * ((t * t * t * t * t) + two) + b)
    }
}

#[inline]
pub fn out_in_quint<F: EaseFloat>(t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
    out_in(out_quint, in_quint, t, b, c, d)
}

calling_forms! {
    linear => linear_unit, linear_range;
    in_quad => in_quad_unit, in_quad_range;
    out_quad => out_quad_unit, out_quad_range;
    in_out_quad => in_out_quad_unit, in_out_quad_range;
    out_in_quad => out_in_quad_unit, out_in_quad_range;
    in_cubic => in_cubic_unit, in_cubic_range;
    out_cubic => out_cubic_unit, out_cubic_range;
    in_out_cubic => in_out_cubic_unit, in_out_cubic_range;
    out_in_cubic => out_in_cubic_unit, out_in_cubic_range;
    in_quart => in_quart_unit, in_quart_range;
    out_quart => out_quart_unit, out_quart_range;
    in_out_quart => in_out_quart_unit, in_out_quart_range;
    out_in_quart => out_in_quart_unit, out_in_quart_range;
    in_quint => in_quint_unit, in_quint_range;
    out_quint => out_quint_unit, out_quint_range;
    in_out_quint => in_out_quint_unit, in_out_quint_range;
    out_in_quint => out_in_quint_unit, out_in_quint_range;
}
