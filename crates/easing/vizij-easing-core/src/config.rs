//! Shape parameter defaults and the serializable easing description.

use serde::{Deserialize, Serialize};

use crate::catalog::EasingKind;
use crate::error::{EasingError, InvalidTimeError};
use crate::float::EaseFloat;

/// Back overshoot used when none is given (about 10% overshoot).
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Elastic period as a fraction of the duration for the in/out forms.
pub const DEFAULT_PERIOD_FACTOR: f64 = 0.3;

/// Elastic period as a fraction of the duration for the in-out form.
pub const DEFAULT_IN_OUT_PERIOD_FACTOR: f64 = 0.45;

/// Optional shape overrides. Families that take no parameters ignore them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Elastic oscillation magnitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    /// Elastic oscillation wavelength, in the same unit as the duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,
    /// Back overshoot size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overshoot: Option<f64>,
}

impl ShapeParams {
    pub fn elastic(amplitude: Option<f64>, period: Option<f64>) -> Self {
        Self {
            amplitude,
            period,
            ..Self::default()
        }
    }

    pub fn back(overshoot: f64) -> Self {
        Self {
            overshoot: Some(overshoot),
            ..Self::default()
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A catalog entry plus its shape parameters, e.g.
/// `{"kind": "in_elastic", "amplitude": 1.5, "period": 0.4}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EasingSpec {
    pub kind: EasingKind,
    #[serde(flatten)]
    pub params: ShapeParams,
}

impl EasingSpec {
    pub fn new(kind: EasingKind, params: ShapeParams) -> Self {
        Self { kind, params }
    }

    /// Parse a spec from JSON. A bare string (`"out_bounce"`) selects the
    /// entry with default parameters. Names accept the same spellings as
    /// [`EasingKind::from_str`](std::str::FromStr) in both forms.
    pub fn from_json(json: &str) -> Result<Self, EasingError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let spec: Self = match value {
            serde_json::Value::String(name) => name.parse::<EasingKind>()?.into(),
            other => serde_json::from_value(other)?,
        };
        if spec.has_unused_params() {
            log::warn!("easing '{}' ignores its shape parameters", spec.kind);
        }
        Ok(spec)
    }

    /// Shape parameters are set but the family does not read them.
    pub fn has_unused_params(&self) -> bool {
        !self.params.is_default() && !self.kind.family().takes_params()
    }

    pub fn to_json(&self) -> Result<String, EasingError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Raw form `f(t, b, c, d)`.
    #[inline]
    pub fn ease<F: EaseFloat>(&self, t: F, b: F, c: F, d: F) -> Result<F, InvalidTimeError> {
        self.kind.ease(t, b, c, d, &self.params)
    }

    /// Normalized form `f(t)`.
    #[inline]
    pub fn ease_unit<F: EaseFloat>(&self, t: F) -> Result<F, InvalidTimeError> {
        self.kind.ease_unit(t, &self.params)
    }

    /// Ranged form `f(time, start, end)`.
    #[inline]
    pub fn ease_range<F: EaseFloat>(
        &self,
        time: F,
        start: F,
        end: F,
    ) -> Result<F, InvalidTimeError> {
        self.kind.ease_range(time, start, end, &self.params)
    }
}

impl From<EasingKind> for EasingSpec {
    fn from(kind: EasingKind) -> Self {
        Self::new(kind, ShapeParams::default())
    }
}

impl Default for EasingSpec {
    fn default() -> Self {
        EasingKind::default().into()
    }
}
