//! `phishcheck model-info` – validate and describe the model artifact.

use anyhow::Result;
use phishcheck_core::checksum;
use phishcheck_core::config::PhishcheckConfig;
use std::path::PathBuf;

pub fn run_model_info(cfg: &PhishcheckConfig, model: Option<PathBuf>) -> Result<()> {
    let (path, model) = super::load_model(cfg, model)?;
    let digest = checksum::sha256_path(&path)?;
    println!("path:       {}", path.display());
    println!("sha256:     {digest}");
    println!("dimensions: {}", model.dimensions());
    println!("bias:       {}", model.bias);
    println!("threshold:  {}", model.threshold);
    Ok(())
}
