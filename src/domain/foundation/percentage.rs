//! Percentage value object (0-100 scale, full precision).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A share between 0 and 100 inclusive.
///
/// The stored value keeps full `f64` precision; only `Display` rounds, to two
/// decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a Percentage, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "percentage",
                format!("expected a finite value between 0 and 100, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Computes `part / whole * 100`.
    ///
    /// Callers guarantee `0 <= part <= whole` and `whole > 0`.
    pub(crate) fn share_of(part: u32, whole: u32) -> Self {
        Self(f64::from(part) / f64::from(whole) * 100.0)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
