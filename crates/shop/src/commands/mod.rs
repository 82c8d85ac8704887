//! Command implementations for the shop CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod auth;
pub mod catalog;
pub mod chips;
pub mod completions;
pub mod config;
pub mod groups;
pub mod navigate;
pub mod products;
pub mod suggest;

use std::path::PathBuf;

use storefront_catalog::{Catalog, CatalogError};
use storefront_query::{CatalogStore, CatalogStoreError};

use crate::cli::Cli;
use config::Config;

/// Base path used by `url` when neither the flag nor the config sets one.
pub const DEFAULT_PATHNAME: &str = "/products";

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog content error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Catalog file error.
    #[error("catalog error: {0}")]
    CatalogStore(#[from] CatalogStoreError),

    /// Form values failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
#[derive(Debug)]
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Explicit catalog file, from the flag/env or the config file.
    pub catalog_path: Option<PathBuf>,
    /// Base path for listing URLs.
    pub pathname: String,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Flags win over config values. Colors are also disabled when `NO_COLOR`
    /// is set.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let color_allowed = config.output.color.unwrap_or(true)
            && std::env::var_os("NO_COLOR").is_none();

        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && color_allowed,
            quiet: cli.quiet,
            catalog_path: cli.catalog.clone().or_else(|| config.catalog.clone()),
            pathname: config
                .pathname
                .clone()
                .unwrap_or_else(|| DEFAULT_PATHNAME.to_string()),
        }
    }

    /// Loads the catalog for this invocation.
    ///
    /// An explicit catalog path must exist. Otherwise the catalog in the data
    /// directory is used when present, and the built-in catalog when not.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        if let Some(path) = &self.catalog_path {
            tracing::debug!(path = %path.display(), "loading catalog");
            return Ok(CatalogStore::with_path(path.clone()).load_async().await?);
        }

        let Ok(store) = CatalogStore::new() else {
            tracing::debug!("no data directory, using built-in catalog");
            return Ok(Catalog::builtin());
        };

        match store.load_async().await {
            Ok(catalog) => Ok(catalog),
            Err(e) if e.is_not_found() => Ok(Catalog::builtin()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
impl CommandContext {
    /// Plain-text context with the built-in catalog, for tests.
    pub(crate) fn for_test() -> Self {
        Self {
            json_output: false,
            use_colors: false,
            quiet: false,
            catalog_path: None,
            pathname: DEFAULT_PATHNAME.to_string(),
        }
    }
}
