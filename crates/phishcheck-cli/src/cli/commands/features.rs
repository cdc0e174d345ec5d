//! `phishcheck features <url>` – show the extracted vector.

use anyhow::Result;
use phishcheck_core::features;

pub fn run_features(url: &str, json: bool) -> Result<()> {
    let vector = features::extract(url);
    if json {
        println!("{}", serde_json::to_string(&vector)?);
        return Ok(());
    }
    println!("{:>3}  {:<28} {}", "#", "FEATURE", "VALUE");
    for (feature, value) in vector.iter_named() {
        println!("{:>3}  {:<28} {}", feature.index() + 1, feature.name(), value);
    }
    Ok(())
}
