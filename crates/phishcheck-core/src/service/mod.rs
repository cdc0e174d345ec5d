//! Classification pipeline: validate, extract, predict, label.
//!
//! Stateless per request. The only shared state is the classifier, held
//! behind an `Arc` and never mutated after construction.

mod response;

pub use response::PredictionResponse;

use crate::classifier::{ClassMarker, Classifier, NEGATIVE_MARKER, POSITIVE_MARKER};
use crate::features;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Phishing,
    Legitimate,
}

impl Label {
    /// Maps a raw classifier marker to a label; `None` for unrecognized markers.
    pub fn from_marker(marker: ClassMarker) -> Option<Self> {
        match marker {
            POSITIVE_MARKER => Some(Label::Phishing),
            NEGATIVE_MARKER => Some(Label::Legitimate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Phishing => "phishing",
            Label::Legitimate => "legitimate",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-facing failure. Messages are fixed; causes are only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Missing URL")]
    InvalidInput,
    #[error("Error during prediction")]
    ClassificationFailure,
}

impl ClassifyError {
    /// True when the caller sent bad input (400), false for internal failures (500).
    pub fn is_client_error(self) -> bool {
        matches!(self, ClassifyError::InvalidInput)
    }
}

pub type PredictionResult = Result<Label, ClassifyError>;

#[derive(Clone)]
pub struct ClassificationService {
    classifier: Arc<dyn Classifier>,
}

impl fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationService").finish_non_exhaustive()
    }
}

impl ClassificationService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Classifies `url`. `None` and `""` are rejected before the classifier is touched.
    pub fn classify(&self, url: Option<&str>) -> PredictionResult {
        let url = match url {
            Some(u) if !u.is_empty() => u,
            _ => return Err(ClassifyError::InvalidInput),
        };

        let vector = features::extract(url);
        let input = vector.to_f64_vec();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.classifier.predict(&input)));
        let marker = match outcome {
            Ok(Ok(marker)) => marker,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "classifier failed");
                return Err(ClassifyError::ClassificationFailure);
            }
            Err(payload) => {
                tracing::error!(panic = panic_message(&*payload), "classifier panicked");
                return Err(ClassifyError::ClassificationFailure);
            }
        };

        match Label::from_marker(marker) {
            Some(label) => {
                tracing::debug!(%label, url_len = url.len(), "classified url");
                Ok(label)
            }
            None => {
                tracing::error!(marker, "classifier returned unrecognized marker");
                Err(ClassifyError::ClassificationFailure)
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

#[cfg(test)]
mod tests;
