//! Server configuration parsed from environment variables.

use std::path::{Path, PathBuf};

use data_browser_ui::catalog::CatalogError;
use data_browser_ui::config::CatalogConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const CATALOG_ENV: &str = "DATA_BROWSER_CATALOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("failed to read catalog {}: {source}", path.display())]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {}: {source}", path.display())]
    ParseCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("inconsistent catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATA_BROWSER_CATALOG`: path to the catalog JSON document
    ///
    /// Optional:
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let catalog_path = lookup(CATALOG_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(CATALOG_ENV))?;

        Ok(Self { port, catalog_path })
    }
}

/// Read and validate the catalog document at `path`.
///
/// Validation resolves every listed model against the field registry, so a
/// server never starts with a catalog the home page cannot render.
pub fn load_catalog(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadCatalog { path: path.to_path_buf(), source })?;
    let catalog = CatalogConfig::from_json(&raw)
        .map_err(|source| ConfigError::ParseCatalog { path: path.to_path_buf(), source })?;
    catalog.resolve_catalog()?;
    Ok(catalog)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
