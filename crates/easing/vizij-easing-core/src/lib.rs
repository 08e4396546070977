//! Vizij Easing Core (engine-agnostic)
//!
//! A catalog of pure easing functions (Penner-style `f(t, b, c, d)`) used for
//! animation timing. Every easing is available in three calling forms:
//!
//! - raw: `in_quad(t, b, c, d)`, the canonical formula;
//! - normalized: `in_quad_unit(t)`, equal to `in_quad(t, 0, 1, 1)`;
//! - ranged: `in_quad_range(time, start, end)`, which rescales `time` into
//!   `[0, 1]`, eases it, and maps the result back onto `[start, end]`.
//!
//! All forms are generic over [`EaseFloat`] and work for both `f32` and `f64`.
//! Evaluating past the end of the duration yields [`InvalidTimeError`];
//! negative time is extrapolated by the formulas.
//!
//! ```
//! use vizij_easing_core::{in_quad_unit, out_in_quad, EasingKind, ShapeParams};
//!
//! assert_eq!(in_quad_unit(0.25f32).unwrap(), 0.0625);
//! assert_eq!(out_in_quad(2.0f64, 0.0, 1.0, 4.0).unwrap(), 0.5);
//!
//! let kind: EasingKind = "out_bounce".parse().unwrap();
//! assert_eq!(kind.ease_unit(1.0f64, &ShapeParams::default()).unwrap(), 1.0);
//! ```

pub mod catalog;
pub mod config;
pub mod curves;
pub mod error;
pub mod float;
pub mod forms;

// Re-exports for consumers (adapters)
pub use catalog::{EasingFamily, EasingKind};
pub use config::{
    EasingSpec, ShapeParams, DEFAULT_IN_OUT_PERIOD_FACTOR, DEFAULT_OVERSHOOT, DEFAULT_PERIOD_FACTOR,
};
pub use curves::*;
pub use error::{EasingError, InvalidTimeError};
pub use float::EaseFloat;
pub use forms::{check_time, normalized, out_in, ranged};
