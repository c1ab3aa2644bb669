use std::fs;
use std::path::Path;

use super::core::{InsertionConfig, WeaveConfig};
use crate::errors::{Result, WeaveError};

pub const CONFIG_FILE_NAME: &str = ".weavekit.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string, repairing an unusable body tag
pub fn parse_and_validate_config(contents: &str) -> Result<WeaveConfig> {
    let mut config = toml::from_str::<WeaveConfig>(contents)?;

    if config.insertion.body_tag.trim().is_empty() {
        log::warn!("Empty insertion.body_tag in config. Using the default.");
        config.insertion = InsertionConfig::default();
    }

    Ok(config)
}

/// Load a specific config file; errors are returned, not defaulted
pub fn load_config_from(path: &Path) -> Result<WeaveConfig> {
    let contents = fs::read_to_string(path)?;
    parse_and_validate_config(&contents).map_err(|e| {
        WeaveError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn try_load_config_from_path(config_path: &Path) -> Option<WeaveConfig> {
    match fs::read_to_string(config_path) {
        Ok(contents) => parse_and_validate_config(&contents)
            .inspect_err(|e| {
                log::warn!("Ignoring {}: {}", config_path.display(), e);
            })
            .ok(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Cannot read {}: {}", config_path.display(), e);
            None
        }
    }
}

/// First `.weavekit.toml` that loads, looking in `start` and then its parents
pub fn discover_config(start: &Path) -> Option<WeaveConfig> {
    start
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .find_map(|dir| try_load_config_from_path(&dir.join(CONFIG_FILE_NAME)))
}

/// Config for the working directory, or defaults when none is found
pub fn load_config() -> WeaveConfig {
    let found = std::env::current_dir()
        .inspect_err(|e| log::warn!("No working directory ({}), using default config", e))
        .ok()
        .and_then(|cwd| discover_config(&cwd));

    found.unwrap_or_else(|| {
        log::debug!("No {} found, using default config", CONFIG_FILE_NAME);
        WeaveConfig::default()
    })
}
