//! Scalar abstraction shared by every curve.

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Floating-point type an easing can be evaluated at.
///
/// Implemented for `f32` and `f64`. Formula constants are written once as
/// `f64` literals and narrowed with [`EaseFloat::lit`].
pub trait EaseFloat: Float + FloatConst + Debug + Display + Send + Sync + 'static {
    /// Convert an `f64` constant into this precision.
    fn lit(v: f64) -> Self;

    /// Widen to `f64` (diagnostics, error payloads).
    fn widen(self) -> f64;
}

impl EaseFloat for f32 {
    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }
}

impl EaseFloat for f64 {
    #[inline]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}
