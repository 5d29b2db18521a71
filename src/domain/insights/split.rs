//! Seeded train/test partitioning.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::InsightsError;

/// Training and held-out partitions of one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit<T> {
    pub train: Vec<T>,
    pub test: Vec<T>,
}

/// Shuffles `samples` with a fixed seed and holds out `ceil(len * test_fraction)`.
///
/// The same seed and input always give the same partitions.
pub fn train_test_split<T: Clone>(
    samples: &[T],
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit<T>, InsightsError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(InsightsError::InvalidSplit(test_fraction));
    }

    let test_len = (samples.len() as f64 * test_fraction).ceil() as usize;
    let mut order: Vec<usize> = (0..samples.len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));

    let (test_idx, train_idx) = order.split_at(test_len.min(samples.len()));
    Ok(TrainTestSplit {
        train: train_idx.iter().map(|&i| samples[i].clone()).collect(),
        test: test_idx.iter().map(|&i| samples[i].clone()).collect(),
    })
}
