//! Scoring Module - pure domain services over questionnaire answers.
//!
//! # Components
//!
//! - `ScoreAggregator` - sums ratings per dimension into a `ScoreSet`
//! - `ScoreSet::percentages` - each dimension's share of the total
//! - `FeedbackClassifier` - high / balanced / low banding with canned text
//! - `ResultsReport` - text lines, feedback and bar chart for the results page
//!
//! All functions are pure and stateless; persisting a `ScoreSet` is the
//! caller's decision.

mod aggregator;
mod feedback;
mod report;
mod score_set;

pub use aggregator::ScoreAggregator;
pub use feedback::{Band, Feedback, FeedbackClassifier};
pub use report::{BarChart, ChartBar, ResultLine, ResultsReport, CHART_SERIES};
pub use score_set::{PercentageSet, ScoreSet, MAX_DIMENSION_SCORE, MIN_DIMENSION_SCORE};
