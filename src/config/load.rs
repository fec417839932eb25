use std::path::Path;

use anyhow::{Context, Result, ensure};

use super::types::{CONFIG_VERSION, PackConfig};

/// Load a config file from the given path.
pub fn load_config(path: &Path) -> Result<PackConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    parse_config(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))
}

/// Parse and check config JSON.
pub fn parse_config(content: &str) -> Result<PackConfig> {
    let config: PackConfig = serde_json::from_str(content)?;

    ensure!(
        config.version == CONFIG_VERSION,
        "unsupported config version {} (expected {})",
        config.version,
        CONFIG_VERSION
    );
    ensure!(
        !config.densities.is_empty(),
        "densities must list at least one density"
    );
    if let Some(zero) = config.densities.iter().position(|&d| d == 0) {
        anyhow::bail!("densities[{}] must be a positive integer", zero);
    }

    Ok(config)
}
