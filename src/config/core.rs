use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::builders::BODY_TAG;

fn default_body_tag() -> String {
    BODY_TAG.to_string()
}

/// Root configuration structure for weavekit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WeaveConfig {
    /// Insertion behaviour
    #[serde(default)]
    pub insertion: InsertionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionConfig {
    /// Placeholder replaced by the body in full method text
    #[serde(default = "default_body_tag")]
    pub body_tag: String,
}

impl Default for InsertionConfig {
    fn default() -> Self {
        Self {
            body_tag: default_body_tag(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}
