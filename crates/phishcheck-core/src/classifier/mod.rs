//! The classifier capability: feature vector in, class marker out.
//!
//! The loaded model is shared read-only for the life of the process, so
//! implementations take `&self` and must be `Send + Sync`.

mod linear;
mod load;

pub use linear::{LinearModel, DEFAULT_THRESHOLD};
pub use load::{load_model, ModelError};

use std::sync::Arc;
use thiserror::Error;

/// Raw class label produced by a classifier.
pub type ClassMarker = i64;

/// Marker meaning "phishing".
pub const POSITIVE_MARKER: ClassMarker = 1;
/// Marker meaning "legitimate".
pub const NEGATIVE_MARKER: ClassMarker = 0;

#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("model produced a non-finite score")]
    NonFiniteScore,
    #[error("{0}")]
    Other(String),
}

pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<ClassMarker, ClassifierError>;
}

impl<C: Classifier + ?Sized> Classifier for Arc<C> {
    fn predict(&self, features: &[f64]) -> Result<ClassMarker, ClassifierError> {
        (**self).predict(features)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, features: &[f64]) -> Result<ClassMarker, ClassifierError> {
        (**self).predict(features)
    }
}
