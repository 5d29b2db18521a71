//! Random Forest Adapter
//!
//! Bagged ensemble of Gini decision trees. Each tree is grown to purity on a
//! bootstrap resample, considering `floor(sqrt(features))` randomly chosen
//! features per split. Prediction averages the trees' leaf class
//! distributions; ties go to the earliest category in `Category::ALL`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::foundation::Dimension;
use crate::domain::insights::{Category, FeatureVector, InsightsError, SyntheticSample};
use crate::ports::{CategoryClassifier, TrainedModel};

const FEATURE_COUNT: usize = Dimension::COUNT;

type ClassCounts = [usize; Category::COUNT];

/// Untrained random forest with a fixed seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomForestClassifier {
    tree_count: usize,
    seed: u64,
}

impl RandomForestClassifier {
    pub fn new(tree_count: usize, seed: u64) -> Self {
        Self {
            tree_count: tree_count.max(1),
            seed,
        }
    }

    pub fn tree_count(&self) -> usize {
        self.tree_count
    }

    fn max_features() -> usize {
        ((FEATURE_COUNT as f64).sqrt().floor() as usize).max(1)
    }
}

impl Default for RandomForestClassifier {
    fn default() -> Self {
        Self::new(100, 42)
    }
}

impl CategoryClassifier for RandomForestClassifier {
    fn name(&self) -> &'static str {
        "random_forest"
    }

    fn fit(&self, training: &[SyntheticSample]) -> Result<Box<dyn TrainedModel>, InsightsError> {
        if training.is_empty() {
            return Err(InsightsError::EmptyTrainingSet);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let n = training.len();
        let trees = (0..self.tree_count)
            .map(|_| {
                let bootstrap: Vec<&SyntheticSample> =
                    (0..n).map(|_| &training[rng.gen_range(0..n)]).collect();
                DecisionTree::grow(bootstrap, Self::max_features(), &mut rng)
            })
            .collect();

        Ok(Box::new(RandomForest { trees }))
    }
}

/// Fitted ensemble.
struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl TrainedModel for RandomForest {
    fn predict(&self, features: &FeatureVector) -> Category {
        let mut votes = [0.0f64; Category::COUNT];
        for tree in &self.trees {
            for (total, p) in votes.iter_mut().zip(tree.distribution(features)) {
                *total += p;
            }
        }

        let mut best = 0;
        for (i, v) in votes.iter().enumerate().skip(1) {
            if *v > votes[best] {
                best = i;
            }
        }
        Category::ALL[best]
    }
}

enum Node {
    Leaf {
        distribution: [f64; Category::COUNT],
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Arena-allocated tree; the root is node 0.
struct DecisionTree {
    nodes: Vec<Node>,
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl DecisionTree {
    fn grow(samples: Vec<&SyntheticSample>, max_features: usize, rng: &mut StdRng) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.build(samples, max_features, rng);
        tree
    }

    fn build(&mut self, samples: Vec<&SyntheticSample>, max_features: usize, rng: &mut StdRng) -> usize {
        let counts = class_counts(&samples);
        let index = self.nodes.len();
        self.nodes.push(Node::Leaf {
            distribution: distribution(&counts, samples.len()),
        });

        if samples.len() < 2 || counts.iter().filter(|&&c| c > 0).count() < 2 {
            return index;
        }

        let Some(split) = best_split(&samples, &counts, max_features, rng) else {
            return index;
        };

        let (left, right): (Vec<_>, Vec<_>) = samples
            .into_iter()
            .partition(|s| f64::from(s.features[split.feature]) <= split.threshold);

        let left = self.build(left, max_features, rng);
        let right = self.build(right, max_features, rng);
        self.nodes[index] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        index
    }

    fn distribution(&self, features: &FeatureVector) -> [f64; Category::COUNT] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { distribution } => return *distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if f64::from(features[*feature]) <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

fn class_counts(samples: &[&SyntheticSample]) -> ClassCounts {
    let mut counts = [0; Category::COUNT];
    for s in samples {
        counts[s.label.index()] += 1;
    }
    counts
}

fn distribution(counts: &ClassCounts, n: usize) -> [f64; Category::COUNT] {
    counts.map(|c| if n == 0 { 0.0 } else { c as f64 / n as f64 })
}

fn gini(counts: &ClassCounts, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n as f64;
            p * p
        })
        .sum::<f64>()
}

/// Best split over a random feature subset. Draws past `max_features` only
/// while no valid split has been found (constant features give none).
fn best_split(
    samples: &[&SyntheticSample],
    counts: &ClassCounts,
    max_features: usize,
    rng: &mut StdRng,
) -> Option<SplitCandidate> {
    let mut order: Vec<usize> = (0..FEATURE_COUNT).collect();
    order.shuffle(rng);

    let mut best: Option<SplitCandidate> = None;
    for (drawn, &feature) in order.iter().enumerate() {
        if drawn >= max_features && best.is_some() {
            break;
        }
        if let Some(candidate) = best_split_on(samples, counts, feature) {
            if best.as_ref().map_or(true, |b| candidate.impurity < b.impurity) {
                best = Some(candidate);
            }
        }
    }
    best
}

fn best_split_on(
    samples: &[&SyntheticSample],
    counts: &ClassCounts,
    feature: usize,
) -> Option<SplitCandidate> {
    let n = samples.len();
    let mut sorted: Vec<(u32, usize)> = samples
        .iter()
        .map(|s| (s.features[feature], s.label.index()))
        .collect();
    sorted.sort_unstable();

    let mut left = [0usize; Category::COUNT];
    let mut best: Option<SplitCandidate> = None;

    for i in 0..n - 1 {
        left[sorted[i].1] += 1;
        if sorted[i].0 == sorted[i + 1].0 {
            continue;
        }

        let n_left = i + 1;
        let n_right = n - n_left;
        let mut right = *counts;
        for (r, l) in right.iter_mut().zip(left) {
            *r -= l;
        }

        let impurity = (n_left as f64 * gini(&left, n_left)
            + n_right as f64 * gini(&right, n_right))
            / n as f64;

        if best.as_ref().map_or(true, |b| impurity < b.impurity) {
            best = Some(SplitCandidate {
                feature,
                threshold: (f64::from(sorted[i].0) + f64::from(sorted[i + 1].0)) / 2.0,
                impurity,
            });
        }
    }
    best
}
