//! CLI command handlers, one per file.

mod classify;
mod completions;
mod features;
mod model_info;
mod serve;

pub use classify::run_classify;
pub use completions::run_completions;
pub use features::run_features;
pub use model_info::run_model_info;
pub use serve::run_serve;

use anyhow::Result;
use phishcheck_core::classifier::{self, LinearModel};
use phishcheck_core::config::PhishcheckConfig;
use std::path::PathBuf;

/// Loads the model from `override_path` or the configured location.
/// The configured checksum only applies to the configured path.
pub(crate) fn load_model(
    cfg: &PhishcheckConfig,
    override_path: Option<PathBuf>,
) -> Result<(PathBuf, LinearModel)> {
    let (path, sha256) = match override_path {
        Some(p) => (p, None),
        None => (cfg.model_path()?, cfg.model.sha256.as_deref()),
    };
    let model = classifier::load_model(&path, sha256)?;
    Ok((path, model))
}
