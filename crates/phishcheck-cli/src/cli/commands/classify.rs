//! `phishcheck classify <url>` – one-shot classification.

use anyhow::{bail, Result};
use phishcheck_core::config::PhishcheckConfig;
use phishcheck_core::service::{ClassificationService, PredictionResponse};
use std::path::PathBuf;
use std::sync::Arc;

pub fn run_classify(
    cfg: &PhishcheckConfig,
    url: &str,
    model: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let (_, model) = super::load_model(cfg, model)?;
    let service = ClassificationService::new(Arc::new(model));
    let outcome = service.classify(Some(url));

    if json {
        println!(
            "{}",
            serde_json::to_string(&PredictionResponse::from(&outcome))?
        );
        return Ok(());
    }
    match outcome {
        Ok(label) => {
            println!("{label}");
            Ok(())
        }
        Err(e) => bail!("{e}"),
    }
}
