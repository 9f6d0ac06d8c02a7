use anyhow::Context;
use simple_repo::SimpleConfig;
use std::path::Path;

/// Loads parser settings from a JSON file, or the defaults when no file is
/// given.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a valid settings object.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SimpleConfig> {
    let Some(path) = path else {
        return Ok(SimpleConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
