//! Wire shape of a classification outcome.

use super::{Label, PredictionResult};
use serde::{Deserialize, Serialize};

/// `{"result": "phishing" | "legitimate"}` or `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Result { result: Label },
    Error { error: String },
}

impl From<&PredictionResult> for PredictionResponse {
    fn from(outcome: &PredictionResult) -> Self {
        match outcome {
            Ok(label) => PredictionResponse::Result { result: *label },
            Err(e) => PredictionResponse::Error {
                error: e.to_string(),
            },
        }
    }
}
