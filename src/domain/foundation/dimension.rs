//! Dimension value object - the four fixed facets of religiousness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the four fixed religiousness dimensions.
///
/// Declaration order is the canonical order used everywhere a dimension
/// sequence matters: questionnaire layout, results listing, and the feature
/// vector handed to the category classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Physicality,
    Psychological,
    Scientific,
    Spiritual,
}

impl Dimension {
    /// Number of dimensions.
    pub const COUNT: usize = 4;

    /// All dimensions in canonical order.
    pub const ALL: [Dimension; Self::COUNT] = [
        Dimension::Physicality,
        Dimension::Psychological,
        Dimension::Scientific,
        Dimension::Spiritual,
    ];

    /// Position of this dimension in canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Physicality => "Physicality",
            Dimension::Psychological => "Psychological",
            Dimension::Scientific => "Scientific",
            Dimension::Spiritual => "Spiritual",
        }
    }

    /// Returns the one-line description shown on the introduction page.
    pub fn description(&self) -> &'static str {
        match self {
            Dimension::Physicality => "Your connection to rituals, symbols, and spaces.",
            Dimension::Psychological => "The role of introspection and emotions.",
            Dimension::Scientific => "How science aligns with your beliefs.",
            Dimension::Spiritual => "Your connection to the unknown and greater forces.",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("dimension", format!("unknown dimension '{}'", s)))
    }
}
