//! Category Predictor - synthesize, split, fit, predict one label.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::domain::scoring::ScoreSet;
use crate::domain::session::{SectionOutcome, SessionContext};
use crate::ports::CategoryClassifier;

use super::{synthesize, train_test_split, Category, InsightsError};

/// Knobs for one prediction run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorSettings {
    /// Synthetic samples drawn per invocation.
    pub sample_count: usize,
    /// Fraction of the batch held out from training.
    pub test_fraction: f64,
    /// Seed for the train/test shuffle.
    pub split_seed: u64,
    /// Seed for data synthesis. `None` draws fresh entropy on every call.
    pub data_seed: Option<u64>,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            sample_count: 100,
            test_fraction: 0.2,
            split_seed: 42,
            data_seed: None,
        }
    }
}

/// Outcome of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub category: Category,
    pub algorithm: &'static str,
    pub training_samples: usize,
    pub held_out_samples: usize,
    /// True when the data seed was fixed, so the same scores give the same label.
    pub reproducible: bool,
}

/// Trains a throwaway model on random data and labels a ScoreSet with it.
///
/// Synthetic labels are independent of the features, so the predicted
/// category is noise relative to the user's answers.
#[derive(Clone)]
pub struct CategoryPredictor {
    classifier: Arc<dyn CategoryClassifier>,
    settings: PredictorSettings,
}

impl CategoryPredictor {
    pub fn new(classifier: Arc<dyn CategoryClassifier>, settings: PredictorSettings) -> Self {
        Self {
            classifier,
            settings,
        }
    }

    pub fn settings(&self) -> &PredictorSettings {
        &self.settings
    }

    /// Predicts for the session's scores, or reports that none exist yet.
    ///
    /// Nothing is synthesized or fitted when the assessment is incomplete.
    pub fn predict_for(
        &self,
        context: &SessionContext,
    ) -> Result<SectionOutcome<Insight>, InsightsError> {
        match context.scores() {
            None => Ok(SectionOutcome::NotCompleted),
            Some(scores) => self.predict(scores).map(SectionOutcome::Ready),
        }
    }

    /// Predicts using the configured data seed.
    pub fn predict(&self, scores: &ScoreSet) -> Result<Insight, InsightsError> {
        let mut rng = match self.settings.data_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.predict_with_rng(scores, &mut rng)
    }

    /// Predicts drawing synthetic data from the given random source.
    pub fn predict_with_rng<R: Rng + ?Sized>(
        &self,
        scores: &ScoreSet,
        rng: &mut R,
    ) -> Result<Insight, InsightsError> {
        let batch = synthesize(rng, self.settings.sample_count);
        let split = train_test_split(&batch, self.settings.test_fraction, self.settings.split_seed)?;
        let model = self.classifier.fit(&split.train)?;

        Ok(Insight {
            category: model.predict(&scores.as_array()),
            algorithm: self.classifier.name(),
            training_samples: split.train.len(),
            held_out_samples: split.test.len(),
            reproducible: self.settings.data_seed.is_some(),
        })
    }
}
