//! Category - the label the insights classifier predicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Religiousness profile category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Balanced")]
    Balanced,
    #[serde(rename = "Spiritual Focused")]
    SpiritualFocused,
    #[serde(rename = "Scientific Skeptic")]
    ScientificSkeptic,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 3;

    /// All categories; also the tie-break order when votes are equal.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Balanced,
        Category::SpiritualFocused,
        Category::ScientificSkeptic,
    ];

    /// Position in `ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Balanced => "Balanced",
            Category::SpiritualFocused => "Spiritual Focused",
            Category::ScientificSkeptic => "Scientific Skeptic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
