use super::{ClassMarker, Classifier, ClassifierError, NEGATIVE_MARKER, POSITIVE_MARKER};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.5;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Logistic regression over the feature vector.
///
/// Serialized as `{"bias": f64, "weights": [f64; N], "threshold": f64}`;
/// `threshold` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub bias: f64,
    pub weights: Vec<f64>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LinearModel {
    pub fn new(bias: f64, weights: Vec<f64>) -> Self {
        Self {
            bias,
            weights,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    /// Probability of the positive class.
    pub fn score(&self, input: &[f64]) -> Result<f64, ClassifierError> {
        if input.len() != self.weights.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        let z = self.bias
            + self
                .weights
                .iter()
                .zip(input)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        let score = sigmoid(z);
        if score.is_finite() {
            Ok(score)
        } else {
            Err(ClassifierError::NonFiniteScore)
        }
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<ClassMarker, ClassifierError> {
        let score = self.score(features)?;
        Ok(if score >= self.threshold {
            POSITIVE_MARKER
        } else {
            NEGATIVE_MARKER
        })
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
