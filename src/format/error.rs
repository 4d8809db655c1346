use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("duration must not be negative (got {0} seconds)")]
    Negative(f64),
    #[error("duration must be a finite number of seconds (got {0})")]
    NonFinite(f64),
    #[error("`{input}` is not a number of seconds")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

impl FormatError {
    /// Rejects values outside the non-negative, finite seconds domain.
    pub fn check(total_secs: f64) -> Result<f64, FormatError> {
        if !total_secs.is_finite() {
            return Err(FormatError::NonFinite(total_secs));
        }
        if total_secs < 0.0 {
            return Err(FormatError::Negative(total_secs));
        }
        Ok(total_secs)
    }
}
