//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_commerce::CartConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart slot and currency.
    #[serde(default)]
    pub cart: CartConfig,

    /// Where cart slots are stored.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Product catalog used by `cart add` and `cart catalog`.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding slot files (default: .cart).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    ".cart".to_string()
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON product feed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
