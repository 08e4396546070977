//! Elastic easings: an exponentially damped sine.
//!
//! Shape parameters are optional:
//! - `amplitude`: oscillation magnitude. Unset, or smaller than `|c|`, falls
//!   back to `c` with a quarter-period phase.
//! - `period`: oscillation wavelength, default `d * 0.3` (`d * 0.45` for
//!   in-out).

use crate::config::{DEFAULT_IN_OUT_PERIOD_FACTOR, DEFAULT_PERIOD_FACTOR};
use crate::error::InvalidTimeError;
use crate::float::EaseFloat;
use crate::forms::{calling_forms, check_time, out_in};

/// Resolved amplitude and phase shift for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Oscillation<F> {
    amplitude: F,
    period: F,
    phase: F,
}

impl<F: EaseFloat> Oscillation<F> {
    fn resolve(c: F, period: F, amplitude: Option<F>) -> Self {
        match amplitude {
            Some(a) if a >= c.abs() => Self {
                amplitude: a,
                period,
                phase: period / (F::lit(2.0) * F::PI()) * (c / a).asin(),
            },
            _ => Self {
                amplitude: c,
                period,
                phase: period / F::lit(4.0),
            },
        }
    }

    /// `sin((t*d - s) * 2π / p)`
    #[inline]
    fn wave(&self, t: F, d: F) -> F {
        ((t * d - self.phase) * (F::lit(2.0) * F::PI()) / self.period).sin()
    }
}

pub fn in_elastic<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    amplitude: Option<F>,
    period: Option<F>,
) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    if t == F::zero() {
        return Ok(b);
    }
    let t = t / d;
    if t == F::one() {
        return Ok(b + c);
    }
    let period = period.unwrap_or_else(|| d * F::lit(DEFAULT_PERIOD_FACTOR));
    let osc = Oscillation::resolve(c, period, amplitude);
    let t = t - F::one();
    Ok(-(osc.amplitude * (F::lit(10.0) * t).exp2() * osc.wave(t, d)) + b)
}

pub fn out_elastic<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    amplitude: Option<F>,
    period: Option<F>,
) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    if t == F::zero() {
        return Ok(b);
    }
    let t = t / d;
    if t == F::one() {
        return Ok(b + c);
    }
    let period = period.unwrap_or_else(|| d * F::lit(DEFAULT_PERIOD_FACTOR));
    let osc = Oscillation::resolve(c, period, amplitude);
    Ok(osc.amplitude * (F::lit(-10.0) * t).exp2() * osc.wave(t, d) + c + b)
}

pub fn in_out_elastic<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    amplitude: Option<F>,
    period: Option<F>,
) -> Result<F, InvalidTimeError> {
    check_time(t, d)?;
    if t == F::zero() {
        return Ok(b);
    }
    let two = F::lit(2.0);
    let half = F::lit(0.5);
    let t = t / d * two;
    if t == two {
        return Ok(b + c);
    }
    let period = period.unwrap_or_else(|| d * F::lit(DEFAULT_IN_OUT_PERIOD_FACTOR));
    let osc = Oscillation::resolve(c, period, amplitude);
    let t = t - F::one();
    if t < F::zero() {
        Ok(-half * (osc.amplitude * (F::lit(10.0) * t).exp2() * osc.wave(t, d)) + b)
    } else {
        Ok(osc.amplitude * (F::lit(-10.0) * t).exp2() * osc.wave(t, d) * half + c + b)
    }
}

pub fn out_in_elastic<F: EaseFloat>(
    t: F,
    b: F,
    c: F,
    d: F,
    amplitude: Option<F>,
    period: Option<F>,
) -> Result<F, InvalidTimeError> {
    out_in(
        |t, b, c, d| out_elastic(t, b, c, d, amplitude, period),
        |t, b, c, d| in_elastic(t, b, c, d, amplitude, period),
        t,
        b,
        c,
        d,
    )
}

calling_forms! {
    in_elastic(None, None) => in_elastic_unit, in_elastic_range;
    out_elastic(None, None) => out_elastic_unit, out_elastic_range;
    in_out_elastic(None, None) => in_out_elastic_unit, in_out_elastic_range;
    out_in_elastic(None, None) => out_in_elastic_unit, out_in_elastic_range;
}
