//! Loading and validating the model artifact.

use super::LinearModel;
use crate::checksum;
use crate::features::FEATURE_COUNT;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse model {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("model {path} has {actual} weights, feature layout has {expected}")]
    Dimension {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
    #[error("model {path} threshold {threshold} is outside [0, 1]")]
    Threshold { path: PathBuf, threshold: f64 },
    #[error("model {path} checksum mismatch: expected {expected}, got {actual}")]
    Checksum {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

/// Loads a [`LinearModel`] from JSON at `path`.
///
/// The weight count must match [`FEATURE_COUNT`]. When `expected_sha256` is
/// given, the file digest must match it (hex, case-insensitive).
pub fn load_model(path: &Path, expected_sha256: Option<&str>) -> Result<LinearModel, ModelError> {
    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let digest = checksum::sha256_hex(&bytes);
    if let Some(expected) = expected_sha256 {
        if !checksum::digests_match(expected, &digest) {
            return Err(ModelError::Checksum {
                path: path.to_path_buf(),
                expected: expected.trim().to_string(),
                actual: digest,
            });
        }
    }

    let model: LinearModel = serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if model.dimensions() != FEATURE_COUNT {
        return Err(ModelError::Dimension {
            path: path.to_path_buf(),
            expected: FEATURE_COUNT,
            actual: model.dimensions(),
        });
    }
    if !(0.0..=1.0).contains(&model.threshold) {
        return Err(ModelError::Threshold {
            path: path.to_path_buf(),
            threshold: model.threshold,
        });
    }

    tracing::info!(
        path = %path.display(),
        sha256 = %digest,
        threshold = model.threshold,
        "loaded model"
    );
    Ok(model)
}
