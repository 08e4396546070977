//! Named catalog of every easing, for callers that select curves by name or
//! from configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ShapeParams;
use crate::curves::{back, bounce, circ, elastic, expo, poly, sine};
use crate::error::{EasingError, InvalidTimeError};
use crate::float::EaseFloat;
use crate::forms::{normalized, ranged};

/// Formula family an easing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFamily {
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Elastic,
    Back,
    Bounce,
}

impl EasingFamily {
    /// Whether [`ShapeParams`] affect this family.
    #[inline]
    pub fn takes_params(&self) -> bool {
        matches!(self, Self::Elastic | Self::Back)
    }
}

/// Every easing in the catalog.
///
/// Serializes as the snake_case name; deserializing accepts every spelling
/// [`FromStr`] does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    OutInQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutInCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    OutInQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    OutInQuint,
    InSine,
    OutSine,
    InOutSine,
    OutInSine,
    InExpo,
    OutExpo,
    InOutExpo,
    OutInExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    OutInCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    OutInElastic,
    InBack,
    OutBack,
    InOutBack,
    OutInBack,
    InBounce,
    OutBounce,
    InOutBounce,
    OutInBounce,
}

impl EasingKind {
    pub const ALL: [EasingKind; 41] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::OutInQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::OutInCubic,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::OutInQuart,
        Self::InQuint,
        Self::OutQuint,
        Self::InOutQuint,
        Self::OutInQuint,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::OutInSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::OutInExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::OutInCirc,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::OutInElastic,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::OutInBack,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
        Self::OutInBounce,
    ];

    /// Get the name of this easing (matches the serde spelling)
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::OutInQuad => "out_in_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
            Self::OutInCubic => "out_in_cubic",
            Self::InQuart => "in_quart",
            Self::OutQuart => "out_quart",
            Self::InOutQuart => "in_out_quart",
            Self::OutInQuart => "out_in_quart",
            Self::InQuint => "in_quint",
            Self::OutQuint => "out_quint",
            Self::InOutQuint => "in_out_quint",
            Self::OutInQuint => "out_in_quint",
            Self::InSine => "in_sine",
            Self::OutSine => "out_sine",
            Self::InOutSine => "in_out_sine",
            Self::OutInSine => "out_in_sine",
            Self::InExpo => "in_expo",
            Self::OutExpo => "out_expo",
            Self::InOutExpo => "in_out_expo",
            Self::OutInExpo => "out_in_expo",
            Self::InCirc => "in_circ",
            Self::OutCirc => "out_circ",
            Self::InOutCirc => "in_out_circ",
            Self::OutInCirc => "out_in_circ",
            Self::InElastic => "in_elastic",
            Self::OutElastic => "out_elastic",
            Self::InOutElastic => "in_out_elastic",
            Self::OutInElastic => "out_in_elastic",
            Self::InBack => "in_back",
            Self::OutBack => "out_back",
            Self::InOutBack => "in_out_back",
            Self::OutInBack => "out_in_back",
            Self::InBounce => "in_bounce",
            Self::OutBounce => "out_bounce",
            Self::InOutBounce => "in_out_bounce",
            Self::OutInBounce => "out_in_bounce",
        }
    }

    pub fn family(&self) -> EasingFamily {
        use EasingKind::*;
        match self {
            Linear => EasingFamily::Linear,
            InQuad | OutQuad | InOutQuad | OutInQuad => EasingFamily::Quad,
            InCubic | OutCubic | InOutCubic | OutInCubic => EasingFamily::Cubic,
            InQuart | OutQuart | InOutQuart | OutInQuart => EasingFamily::Quart,
            InQuint | OutQuint | InOutQuint | OutInQuint => EasingFamily::Quint,
            InSine | OutSine | InOutSine | OutInSine => EasingFamily::Sine,
            InExpo | OutExpo | InOutExpo | OutInExpo => EasingFamily::Expo,
            InCirc | OutCirc | InOutCirc | OutInCirc => EasingFamily::Circ,
            InElastic | OutElastic | InOutElastic | OutInElastic => EasingFamily::Elastic,
            InBack | OutBack | InOutBack | OutInBack => EasingFamily::Back,
            InBounce | OutBounce | InOutBounce | OutInBounce => EasingFamily::Bounce,
        }
    }

    /// The `(out, in)` pair an OutIn easing combines, `None` for the rest.
    pub fn out_in_pair(&self) -> Option<(EasingKind, EasingKind)> {
        use EasingKind::*;
        match self {
            OutInQuad => Some((OutQuad, InQuad)),
            OutInCubic => Some((OutCubic, InCubic)),
            OutInQuart => Some((OutQuart, InQuart)),
            OutInQuint => Some((OutQuint, InQuint)),
            OutInSine => Some((OutSine, InSine)),
            OutInExpo => Some((OutExpo, InExpo)),
            OutInCirc => Some((OutCirc, InCirc)),
            OutInElastic => Some((OutElastic, InElastic)),
            OutInBack => Some((OutBack, InBack)),
            OutInBounce => Some((OutBounce, InBounce)),
            _ => None,
        }
    }

    /// Lenient lookup: unknown names fall back to [`EasingKind::Linear`].
    pub fn from_name_or_linear(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown easing '{name}', falling back to linear");
            Self::Linear
        })
    }

    /// Raw form `f(t, b, c, d)` with optional shape parameters.
    pub fn ease<F: EaseFloat>(
        &self,
        t: F,
        b: F,
        c: F,
        d: F,
        params: &ShapeParams,
    ) -> Result<F, InvalidTimeError> {
        let amplitude = params.amplitude.map(F::lit);
        let period = params.period.map(F::lit);
        let overshoot = params.overshoot.map(F::lit);
        match self {
            Self::Linear => poly::linear(t, b, c, d),
            Self::InQuad => poly::in_quad(t, b, c, d),
            Self::OutQuad => poly::out_quad(t, b, c, d),
            Self::InOutQuad => poly::in_out_quad(t, b, c, d),
            Self::OutInQuad => poly::out_in_quad(t, b, c, d),
            Self::InCubic => poly::in_cubic(t, b, c, d),
            Self::OutCubic => poly::out_cubic(t, b, c, d),
            Self::InOutCubic => poly::in_out_cubic(t, b, c, d),
            Self::OutInCubic => poly::out_in_cubic(t, b, c, d),
            Self::InQuart => poly::in_quart(t, b, c, d),
            Self::OutQuart => poly::out_quart(t, b, c, d),
            Self::InOutQuart => poly::in_out_quart(t, b, c, d),
            Self::OutInQuart => poly::out_in_quart(t, b, c, d),
            Self::InQuint => poly::in_quint(t, b, c, d),
            Self::OutQuint => poly::out_quint(t, b, c, d),
            Self::InOutQuint => poly::in_out_quint(t, b, c, d),
            Self::OutInQuint => poly::out_in_quint(t, b, c, d),
            Self::InSine => sine::in_sine(t, b, c, d),
            Self::OutSine => sine::out_sine(t, b, c, d),
            Self::InOutSine => sine::in_out_sine(t, b, c, d),
            Self::OutInSine => sine::out_in_sine(t, b, c, d),
            Self::InExpo => expo::in_expo(t, b, c, d),
            Self::OutExpo => expo::out_expo(t, b, c, d),
            Self::InOutExpo => expo::in_out_expo(t, b, c, d),
            Self::OutInExpo => expo::out_in_expo(t, b, c, d),
            Self::InCirc => circ::in_circ(t, b, c, d),
            Self::OutCirc => circ::out_circ(t, b, c, d),
            Self::InOutCirc => circ::in_out_circ(t, b, c, d),
            Self::OutInCirc => circ::out_in_circ(t, b, c, d),
            Self::InElastic => elastic::in_elastic(t, b, c, d, amplitude, period),
            Self::OutElastic => elastic::out_elastic(t, b, c, d, amplitude, period),
            Self::InOutElastic => elastic::in_out_elastic(t, b, c, d, amplitude, period),
            Self::OutInElastic => elastic::out_in_elastic(t, b, c, d, amplitude, period),
            Self::InBack => back::in_back(t, b, c, d, overshoot),
            Self::OutBack => back::out_back(t, b, c, d, overshoot),
            Self::InOutBack => back::in_out_back(t, b, c, d, overshoot),
            Self::OutInBack => back::out_in_back(t, b, c, d, overshoot),
            Self::InBounce => bounce::in_bounce(t, b, c, d),
            Self::OutBounce => bounce::out_bounce(t, b, c, d),
            Self::InOutBounce => bounce::in_out_bounce(t, b, c, d),
            Self::OutInBounce => bounce::out_in_bounce(t, b, c, d),
        }
    }

    /// Normalized form `f(t)` == `f(t, 0, 1, 1)`.
    #[inline]
    pub fn ease_unit<F: EaseFloat>(
        &self,
        t: F,
        params: &ShapeParams,
    ) -> Result<F, InvalidTimeError> {
        normalized(|t: F, b: F, c: F, d: F| self.ease(t, b, c, d, params), t)
    }

    /// Ranged form `f(time, start, end)`.
    #[inline]
    pub fn ease_range<F: EaseFloat>(
        &self,
        time: F,
        start: F,
        end: F,
        params: &ShapeParams,
    ) -> Result<F, InvalidTimeError> {
        ranged(|t: F| self.ease_unit(t, params), time, start, end)
    }
}

/// Case-insensitive comparison ignoring `_`, `-` and spaces, so `OutInQuad`,
/// `out_in_quad` and `out-in-quad` all match `out_in_quad`.
fn same_name(input: &str, name: &str) -> bool {
    input
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .eq(name.chars().filter(|&c| c != '_'))
}

impl FromStr for EasingKind {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| same_name(s, kind.name()))
            .ok_or_else(|| EasingError::UnknownEasing {
                name: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for EasingKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EasingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
