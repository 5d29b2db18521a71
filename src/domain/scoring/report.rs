//! ResultsReport - everything the results page renders for one ScoreSet.

use serde::Serialize;

use crate::domain::foundation::{Dimension, Percentage};

use super::{Feedback, FeedbackClassifier, PercentageSet, ScoreSet};

/// Series name under which the bar chart plots percentages.
pub const CHART_SERIES: &str = "Score Percentage";

/// One text line of the results listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultLine {
    pub dimension: Dimension,
    pub percentage: Percentage,
    /// `"{dimension}: {percentage:.2}%"`
    pub display: String,
}

/// One bar of the results chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub dimension: Dimension,
    pub value: f64,
}

/// Bar chart of per-dimension percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub series: &'static str,
    pub bars: Vec<ChartBar>,
}

/// Derived view of a ScoreSet: percentages, text lines, feedback and chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsReport {
    pub scores: ScoreSet,
    pub percentages: PercentageSet,
    pub lines: Vec<ResultLine>,
    pub feedback: Vec<Feedback>,
    pub chart: BarChart,
}

impl ResultsReport {
    pub fn from_scores(scores: ScoreSet) -> Self {
        let percentages = scores.percentages();

        let lines = percentages
            .iter()
            .map(|(dimension, percentage)| ResultLine {
                dimension,
                percentage,
                display: format!("{}: {}", dimension, percentage),
            })
            .collect();

        let chart = BarChart {
            series: CHART_SERIES,
            bars: percentages
                .iter()
                .map(|(dimension, p)| ChartBar {
                    dimension,
                    value: p.value(),
                })
                .collect(),
        };

        Self {
            scores,
            feedback: FeedbackClassifier::classify_all(&percentages),
            percentages,
            lines,
            chart,
        }
    }
}
