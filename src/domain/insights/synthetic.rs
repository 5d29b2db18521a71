//! Synthetic training data for the insights classifier.
//!
//! Labels are drawn independently of the features, so a model trained on
//! this data carries no information about real answers.

use rand::Rng;
use serde::Serialize;

use crate::domain::foundation::Dimension;

use super::Category;

/// Lowest synthetic feature value (inclusive).
pub const FEATURE_MIN: u32 = 10;

/// Highest synthetic feature value (inclusive).
pub const FEATURE_MAX: u32 = 25;

/// One value per dimension, in canonical dimension order.
pub type FeatureVector = [u32; Dimension::COUNT];

/// Randomly generated labeled record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntheticSample {
    pub features: FeatureVector,
    pub label: Category,
}

/// Draws `count` samples: features uniform over `[FEATURE_MIN, FEATURE_MAX]`,
/// labels uniform over `Category::ALL`.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<SyntheticSample> {
    (0..count)
        .map(|_| SyntheticSample {
            features: std::array::from_fn(|_| rng.gen_range(FEATURE_MIN..=FEATURE_MAX)),
            label: Category::ALL[rng.gen_range(0..Category::COUNT)],
        })
        .collect()
}
