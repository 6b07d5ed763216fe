//! Error types for fader configuration.

use thiserror::Error;

/// Errors returned by fallible fader setters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FaderError {
    /// Lower bound is above the upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },

    /// A bound was NaN or infinite.
    #[error("non-finite {field}: {value}")]
    NonFinite {
        /// Name of the rejected property.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_display() {
        let err = FaderError::InvalidRange { min: 2.0, max: 1.0 };
        assert_eq!(err.to_string(), "invalid range: min 2 is greater than max 1");
    }

    #[test]
    fn non_finite_display() {
        let err = FaderError::NonFinite {
            field: "min_value",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "non-finite min_value: inf");
    }
}
