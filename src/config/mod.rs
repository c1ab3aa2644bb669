mod core;
mod loader;

pub use self::core::{InsertionConfig, OutputConfig, OutputFormat, WeaveConfig};
pub use loader::{
    discover_config, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
