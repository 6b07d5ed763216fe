//! Layout validation.
//!
//! [`Layout::build_group`](crate::Layout::build_group) is lenient: it clamps
//! out-of-range values and stops at the first broken entry. Validation is
//! strict and reports every problem at once, which is what an editor or a
//! CLI check wants.
//!
//! # Example
//!
//! ```rust
//! use livefader_config::{FaderConfig, Layout, validate_layout};
//!
//! let layout = Layout::new("Bad").with_fader(FaderConfig::new("Gain").with_value(3.0));
//! assert!(validate_layout(&layout).is_err());
//! ```

use thiserror::Error;

use crate::layout::{FaderConfig, Layout};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Bound or value is NaN or infinite.
    #[error("fader '{fader}': {field} is not finite")]
    NonFinite {
        /// Label of the fader.
        fader: String,
        /// Offending property.
        field: &'static str,
    },

    /// Lower bound above upper bound.
    #[error("fader '{fader}': min_value {min} is greater than max_value {max}")]
    InvalidRange {
        /// Label of the fader.
        fader: String,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Initial value outside the bounds.
    #[error("fader '{fader}': value {value} out of range [{min}, {max}]")]
    ValueOutOfRange {
        /// Label of the fader.
        fader: String,
        /// The value that was out of range.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Color string that is not `#RRGGBB` / `#RRGGBBAA`.
    #[error("fader '{fader}': invalid color for {field}: '{value}'")]
    InvalidColor {
        /// Label of the fader.
        fader: String,
        /// Color property.
        field: &'static str,
        /// The rejected string.
        value: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Collect every problem of one fader entry.
fn fader_errors(fader: &FaderConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let label = || fader.label.clone();

    for (field, value) in [
        ("value", fader.value),
        ("min_value", fader.min_value),
        ("max_value", fader.max_value),
    ] {
        if !value.is_finite() {
            errors.push(ValidationError::NonFinite {
                fader: label(),
                field,
            });
        }
    }

    if errors.is_empty() {
        if fader.min_value > fader.max_value {
            errors.push(ValidationError::InvalidRange {
                fader: label(),
                min: fader.min_value,
                max: fader.max_value,
            });
        } else if fader.value < fader.min_value || fader.value > fader.max_value {
            errors.push(ValidationError::ValueOutOfRange {
                fader: label(),
                value: fader.value,
                min: fader.min_value,
                max: fader.max_value,
            });
        }
    }

    if let Err(e) = fader.colors.resolve(&fader.label) {
        errors.push(e);
    }

    errors
}

fn collapse(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Validate one fader entry.
pub fn validate_fader(fader: &FaderConfig) -> ValidationResult<()> {
    collapse(fader_errors(fader))
}

/// Validate every fader of a layout.
pub fn validate_layout(layout: &Layout) -> ValidationResult<()> {
    let errors = layout.faders.iter().flat_map(fader_errors).collect();
    collapse(errors)
}
