//! Page configuration for the data browser landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server loads a `CatalogConfig`, renders it into the HTML shell as a
//! JSON script element, and `hydrate()` reads the same element back so the
//! browser renders exactly the catalog the server did.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::catalog::{AppModels, CatalogError, ModelFieldRegistry, ResolvedCatalog};
use crate::query::RowLimit;

/// DOM id of the script element carrying the embedded config.
pub const CONFIG_ELEMENT_ID: &str = "data-browser-config";

pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_ROW_LIMIT: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_row_limit")]
    pub default_row_limit: NonZeroU32,
    #[serde(default)]
    pub sorted_models: Vec<AppModels>,
    #[serde(default)]
    pub all_model_fields: ModelFieldRegistry,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_row_limit: default_row_limit(),
            sorted_models: Vec::new(),
            all_model_fields: ModelFieldRegistry::new(),
        }
    }
}

impl CatalogConfig {
    /// Parse a config from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is not a valid config document.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// JSON form safe to place inside a `<script>` element.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    #[must_use]
    pub fn row_limit(&self) -> RowLimit {
        RowLimit::Rows(self.default_row_limit)
    }

    /// Validate the model listing against the field registry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when a listed model has no registry entry.
    pub fn resolve_catalog(&self) -> Result<ResolvedCatalog, CatalogError> {
        ResolvedCatalog::resolve(&self.sorted_models, &self.all_model_fields, self.row_limit())
    }

    /// Router base path: `base_url` without its trailing slash.
    #[must_use]
    pub fn router_base(&self) -> String {
        self.base_url.trim_end_matches('/').to_owned()
    }
}

/// Read the config embedded by the server-rendered shell.
pub fn read_embedded() -> Option<CatalogConfig> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let raw = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
        match CatalogConfig::from_json(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                leptos::logging::warn!("embedded config is invalid: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_row_limit() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_ROW_LIMIT).unwrap_or(NonZeroU32::MIN)
}
