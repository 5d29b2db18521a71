//! Insights Module - the "Advanced Insights" category prediction.
//!
//! Each invocation synthesizes a fresh random labeled batch, splits it, fits
//! a `CategoryClassifier` on the training partition and predicts one
//! `Category` for the session's ScoreSet. Neither the batch nor the fitted
//! model survives the call.

mod category;
mod errors;
mod predictor;
mod split;
mod synthetic;

pub use category::Category;
pub use errors::InsightsError;
pub use predictor::{CategoryPredictor, Insight, PredictorSettings};
pub use split::{train_test_split, TrainTestSplit};
pub use synthetic::{synthesize, FeatureVector, SyntheticSample, FEATURE_MAX, FEATURE_MIN};
