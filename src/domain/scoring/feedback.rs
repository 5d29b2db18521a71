//! Feedback Classifier - maps a dimension's percentage to a fixed band.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Dimension, Percentage};

use super::PercentageSet;

/// Share above which a dimension is "high".
const HIGH_THRESHOLD: f64 = 50.0;

/// Share at or above which a dimension is at least "balanced".
const BALANCED_THRESHOLD: f64 = 30.0;

/// Feedback band for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    High,
    Balanced,
    Low,
}

impl Band {
    /// Band for a percentage: `p > 50` high, `30 <= p <= 50` balanced, else low.
    pub fn for_percentage(p: f64) -> Self {
        if p > HIGH_THRESHOLD {
            Band::High
        } else if p >= BALANCED_THRESHOLD {
            Band::Balanced
        } else {
            Band::Low
        }
    }

    /// Machine-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Band::High => "high",
            Band::Balanced => "balanced",
            Band::Low => "low",
        }
    }

    /// Canned message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Band::High => "You are highly attuned to this dimension.",
            Band::Balanced => "You show a balanced approach to this dimension.",
            Band::Low => "This dimension may not play a central role in your beliefs.",
        }
    }

    /// Marker the results page prints before the dimension name.
    pub fn symbol(&self) -> &'static str {
        match self {
            Band::High => "🌟",
            Band::Balanced => "⚖️",
            Band::Low => "🌀",
        }
    }
}

/// Rendered feedback for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub dimension: Dimension,
    pub percentage: Percentage,
    pub band: Band,
    pub message: &'static str,
}

/// Pure, stateless banding of percentages.
pub struct FeedbackClassifier;

impl FeedbackClassifier {
    /// Classifies one dimension's share.
    pub fn classify(dimension: Dimension, percentage: Percentage) -> Feedback {
        let band = Band::for_percentage(percentage.value());
        Feedback {
            dimension,
            percentage,
            band,
            message: band.message(),
        }
    }

    /// Classifies every dimension, in canonical order.
    pub fn classify_all(percentages: &PercentageSet) -> Vec<Feedback> {
        percentages
            .iter()
            .map(|(d, p)| Self::classify(d, p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::ScoreSet;
    use proptest::prelude::*;

    #[test]
    fn boundaries_resolve_inclusively() {
        assert_eq!(Band::for_percentage(50.0), Band::Balanced);
        assert_eq!(Band::for_percentage(50.01), Band::High);
        assert_eq!(Band::for_percentage(30.0), Band::Balanced);
        assert_eq!(Band::for_percentage(29.99), Band::Low);
    }

    #[test]
    fn extremes_map_to_outer_bands() {
        assert_eq!(Band::for_percentage(0.0), Band::Low);
        assert_eq!(Band::for_percentage(100.0), Band::High);
    }

    #[test]
    fn classify_carries_canned_message() {
        let pct = Percentage::try_new(62.5).unwrap();
        let feedback = FeedbackClassifier::classify(Dimension::Spiritual, pct);
        assert_eq!(feedback.band, Band::High);
        assert_eq!(feedback.message, "You are highly attuned to this dimension.");
    }

    #[test]
    fn classify_all_returns_one_entry_per_dimension() {
        let pct = ScoreSet::try_from_sums([5, 5, 5, 25]).unwrap().percentages();
        let feedback = FeedbackClassifier::classify_all(&pct);

        assert_eq!(feedback.len(), Dimension::COUNT);
        assert_eq!(feedback[0].dimension, Dimension::Physicality);
        assert_eq!(feedback[0].band, Band::Low);
        assert_eq!(feedback[3].band, Band::High);
    }

    #[test]
    fn band_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Band::Balanced).unwrap(), "\"balanced\"");
    }

    proptest! {
        #[test]
        fn banding_is_deterministic_and_monotone(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            prop_assert_eq!(Band::for_percentage(a), Band::for_percentage(a));
            let rank = |band: Band| match band { Band::Low => 0, Band::Balanced => 1, Band::High => 2 };
            if a <= b {
                prop_assert!(rank(Band::for_percentage(a)) <= rank(Band::for_percentage(b)));
            }
        }
    }
}
