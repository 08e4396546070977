//! Error types for easing evaluation and catalog lookup

use serde::{Deserialize, Serialize};

/// An easing was evaluated with `time` past `limit` (its duration, or `1`
/// for the normalized and ranged forms).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[error("time {time} is invalid: must not exceed {limit}")]
pub struct InvalidTimeError {
    pub time: f64,
    pub limit: f64,
}

impl InvalidTimeError {
    pub fn new(time: f64, limit: f64) -> Self {
        Self { time, limit }
    }
}

/// Errors surfaced by the named catalog and its JSON configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Evaluation rejected the time value
    #[error(transparent)]
    InvalidTime(#[from] InvalidTimeError),

    /// No catalog entry carries this name
    #[error("Easing not found: {name}")]
    UnknownEasing { name: String },

    /// Malformed easing spec JSON
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl EasingError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidTime(_) => "validation",
            Self::UnknownEasing { .. } => "catalog",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for EasingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_message_names_both_values() {
        let err = InvalidTimeError::new(1.5, 1.0);
        assert_eq!(err.to_string(), "time 1.5 is invalid: must not exceed 1");
    }

    #[test]
    fn test_invalid_time_converts_transparently() {
        let err: EasingError = InvalidTimeError::new(7.0, 6.0).into();
        assert_eq!(err.category(), "validation");
        assert_eq!(err.to_string(), "time 7 is invalid: must not exceed 6");
    }

    #[test]
    fn test_error_categories() {
        let unknown = EasingError::UnknownEasing {
            name: "wobble".to_string(),
        };
        assert_eq!(unknown.category(), "catalog");

        let bad_json: EasingError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(bad_json.category(), "serialization");
    }

    #[test]
    fn test_serialization() {
        let error = EasingError::UnknownEasing {
            name: "test".to_string(),
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: EasingError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
