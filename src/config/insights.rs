//! Advanced insights configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::insights::PredictorSettings;

/// Learning algorithm used for category prediction
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierAlgorithm {
    #[default]
    RandomForest,
    NearestCentroid,
}

/// Category predictor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InsightsConfig {
    /// Synthetic samples drawn per prediction
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Fraction of samples held out from training
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,

    /// Seed for the train/test shuffle
    #[serde(default = "default_seed")]
    pub split_seed: u64,

    /// Seed for the classifier's own randomness
    #[serde(default = "default_seed")]
    pub model_seed: u64,

    /// Trees in the random forest
    #[serde(default = "default_tree_count")]
    pub tree_count: usize,

    /// Seed for synthetic data; unset means fresh entropy on every prediction
    pub data_seed: Option<u64>,

    /// Which classifier to fit
    #[serde(default)]
    pub algorithm: ClassifierAlgorithm,
}

impl InsightsConfig {
    /// Settings handed to the category predictor
    pub fn predictor_settings(&self) -> PredictorSettings {
        PredictorSettings {
            sample_count: self.sample_count,
            test_fraction: self.test_fraction,
            split_seed: self.split_seed,
            data_seed: self.data_seed,
        }
    }

    /// Validate insights configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_count < 10 {
            return Err(ValidationError::SampleCountTooSmall);
        }
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(ValidationError::InvalidTestFraction);
        }
        if self.tree_count == 0 || self.tree_count > 1000 {
            return Err(ValidationError::InvalidTreeCount);
        }
        Ok(())
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            test_fraction: default_test_fraction(),
            split_seed: default_seed(),
            model_seed: default_seed(),
            tree_count: default_tree_count(),
            data_seed: None,
            algorithm: ClassifierAlgorithm::default(),
        }
    }
}

fn default_sample_count() -> usize {
    100
}

fn default_test_fraction() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

fn default_tree_count() -> usize {
    100
}
