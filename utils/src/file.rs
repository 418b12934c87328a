use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;

/// Reads a YAML (or JSON, which is valid YAML) manifest from disk.
pub async fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_manifest_string(path).await?;
    let manifest = serde_yaml::from_str(&contents)
        .with_context(|| format!("Could not parse manifest {}", path.display()))?;
    Ok(manifest)
}

pub async fn read_manifest_string(path: &Path) -> Result<String> {
    debug!("Reading manifest from {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read manifest {}", path.display()))
}
