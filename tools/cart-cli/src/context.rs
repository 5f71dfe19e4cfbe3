//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_cache::FileStore;
use turbo_commerce::prelude::*;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["cart.toml", ".cart.toml", "cart.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the cart over the configured data directory and hydrate it.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let data_dir = self.resolve_path(&self.config.storage.data_dir);
        let storage = FileStore::open(&data_dir)
            .with_context(|| format!("Failed to open cart storage at {}", data_dir.display()))?;

        let mut cart = CartStore::new(storage, &self.config.cart);
        match cart.hydrate() {
            Hydration::Malformed => self
                .output
                .warn("Stored cart could not be read, starting with an empty cart"),
            Hydration::Unavailable => self
                .output
                .warn("Cart storage is unavailable, changes will not be saved"),
            Hydration::Restored { .. } | Hydration::Empty => {}
        }
        Ok(cart)
    }

    /// Load the configured product catalog.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        let path = self
            .config
            .catalog
            .path
            .as_deref()
            .context("No catalog configured; set [catalog] path in cart.toml")?;
        let path = self.resolve_path(path);
        StaticCatalog::load(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
