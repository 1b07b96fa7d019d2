use anyhow::{Context, Result};
use std::path::Path;

use dynmat::Limits;

/// Load size limits from a JSON file. Missing fields keep their defaults.
pub fn load_limits<P: AsRef<Path>>(path: P) -> Result<Limits> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let limits: Limits = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    limits
        .validate()
        .with_context(|| format!("Invalid limits in config: {}", path.as_ref().display()))?;
    log::debug!("loaded limits {:?}", limits);
    Ok(limits)
}

/// Limits from `path` when given, otherwise the library defaults.
pub fn resolve_limits<P: AsRef<Path>>(path: Option<P>) -> Result<Limits> {
    match path {
        Some(path) => load_limits(path),
        None => Ok(Limits::default()),
    }
}
