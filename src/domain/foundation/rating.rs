//! Rating value object for questionnaire answers (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Agreement rating for one question: 1 (strongly disagree) to 5 (strongly agree).
///
/// Serializes as its integer value so request bodies can carry plain numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rating {
    StronglyDisagree = 1,
    Disagree = 2,
    #[default]
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl Rating {
    /// Lowest value on the scale.
    pub const MIN: u8 = 1;

    /// Highest value on the scale.
    pub const MAX: u8 = 5;

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Rating::StronglyDisagree),
            2 => Ok(Rating::Disagree),
            3 => Ok(Rating::Neutral),
            4 => Ok(Rating::Agree),
            5 => Ok(Rating::StronglyAgree),
            _ => Err(ValidationError::out_of_range(
                "rating",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
