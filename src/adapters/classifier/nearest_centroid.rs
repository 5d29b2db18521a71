//! Nearest Centroid Adapter
//!
//! Linear multi-class model: one mean feature vector per category, predict
//! the category whose centroid is closest in Euclidean distance.

use crate::domain::foundation::Dimension;
use crate::domain::insights::{Category, FeatureVector, InsightsError, SyntheticSample};
use crate::ports::{CategoryClassifier, TrainedModel};

type Centroid = [f64; Dimension::COUNT];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestCentroidClassifier;

impl CategoryClassifier for NearestCentroidClassifier {
    fn name(&self) -> &'static str {
        "nearest_centroid"
    }

    fn fit(&self, training: &[SyntheticSample]) -> Result<Box<dyn TrainedModel>, InsightsError> {
        if training.is_empty() {
            return Err(InsightsError::EmptyTrainingSet);
        }

        let mut sums = [[0.0f64; Dimension::COUNT]; Category::COUNT];
        let mut counts = [0usize; Category::COUNT];
        for sample in training {
            let class = sample.label.index();
            counts[class] += 1;
            for (sum, value) in sums[class].iter_mut().zip(sample.features) {
                *sum += f64::from(value);
            }
        }

        let centroids = std::array::from_fn(|class| {
            (counts[class] > 0).then(|| sums[class].map(|s| s / counts[class] as f64))
        });

        Ok(Box::new(NearestCentroid { centroids }))
    }
}

struct NearestCentroid {
    /// `None` for categories absent from the training partition.
    centroids: [Option<Centroid>; Category::COUNT],
}

impl TrainedModel for NearestCentroid {
    fn predict(&self, features: &FeatureVector) -> Category {
        let mut best: Option<(usize, f64)> = None;
        for (class, centroid) in self.centroids.iter().enumerate() {
            let Some(centroid) = centroid else { continue };
            let distance: f64 = centroid
                .iter()
                .zip(features)
                .map(|(c, &f)| (c - f64::from(f)).powi(2))
                .sum();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((class, distance));
            }
        }
        // fit guarantees at least one centroid
        best.map_or(Category::ALL[0], |(class, _)| Category::ALL[class])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(features: FeatureVector, label: Category) -> SyntheticSample {
        SyntheticSample { features, label }
    }

    #[test]
    fn fit_rejects_empty_training_set() {
        assert!(matches!(
            NearestCentroidClassifier.fit(&[]),
            Err(InsightsError::EmptyTrainingSet)
        ));
    }

    #[test]
    fn predicts_closest_centroid() {
        let training = vec![
            sample([10, 10, 10, 10], Category::Balanced),
            sample([12, 12, 12, 12], Category::Balanced),
            sample([24, 24, 24, 24], Category::SpiritualFocused),
            sample([10, 10, 25, 25], Category::ScientificSkeptic),
        ];
        let model = NearestCentroidClassifier.fit(&training).unwrap();

        assert_eq!(model.predict(&[11, 11, 11, 11]), Category::Balanced);
        assert_eq!(model.predict(&[23, 25, 24, 23]), Category::SpiritualFocused);
        assert_eq!(model.predict(&[10, 11, 25, 24]), Category::ScientificSkeptic);
    }

    #[test]
    fn ignores_categories_missing_from_training() {
        let training = vec![sample([20, 20, 20, 20], Category::ScientificSkeptic)];
        let model = NearestCentroidClassifier.fit(&training).unwrap();
        assert_eq!(model.predict(&[10, 10, 10, 10]), Category::ScientificSkeptic);
    }
}
