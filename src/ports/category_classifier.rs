//! Category Classifier Port - any multi-class learner over synthetic samples.
//!
//! A `CategoryClassifier` is the untrained algorithm plus its settings. Each
//! call to `fit` returns a fresh `TrainedModel` that the caller drops after
//! predicting; models are never cached.

use crate::domain::insights::{Category, FeatureVector, InsightsError, SyntheticSample};

/// A fitted model able to label one feature vector.
pub trait TrainedModel: Send {
    fn predict(&self, features: &FeatureVector) -> Category;
}

/// Multi-class learning algorithm.
pub trait CategoryClassifier: Send + Sync {
    /// Short algorithm name for logs and responses.
    fn name(&self) -> &'static str;

    /// Fits a model on labeled samples.
    ///
    /// # Errors
    /// Returns `InsightsError::EmptyTrainingSet` when `training` is empty.
    fn fit(&self, training: &[SyntheticSample]) -> Result<Box<dyn TrainedModel>, InsightsError>;
}
