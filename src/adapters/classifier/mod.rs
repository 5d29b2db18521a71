//! Classifier adapters - concrete multi-class learners.
//!
//! - `RandomForestClassifier` - bagged Gini decision trees (default)
//! - `NearestCentroidClassifier` - per-category mean vectors

mod nearest_centroid;
mod random_forest;

pub use nearest_centroid::NearestCentroidClassifier;
pub use random_forest::RandomForestClassifier;

use std::sync::Arc;

use crate::config::{ClassifierAlgorithm, InsightsConfig};
use crate::ports::CategoryClassifier;

/// Builds the configured classifier.
pub fn build_classifier(config: &InsightsConfig) -> Arc<dyn CategoryClassifier> {
    match config.algorithm {
        ClassifierAlgorithm::RandomForest => {
            Arc::new(RandomForestClassifier::new(config.tree_count, config.model_seed))
        }
        ClassifierAlgorithm::NearestCentroid => Arc::new(NearestCentroidClassifier),
    }
}
