//! Model registry inputs and the validated catalog shown on the home page.
//!
//! DESIGN
//! ======
//! `sorted_models` and `all_model_fields` are produced upstream from the same
//! model registry. `ResolvedCatalog::resolve` checks them against each other
//! once, so rendering code never performs an unchecked registry lookup.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::{Filter, OutputFormat, QueryDescriptor, RowLimit, rel_url_for_query};

/// Per-model metadata keyed by fully-qualified model name.
pub type ModelFieldRegistry = HashMap<String, ModelFields>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("model `{0}` is listed but has no field registry entry")]
    UnknownModel(String),
}

/// Registry entry for one model. Only the default filters are consumed here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFields {
    #[serde(default)]
    pub default_filters: Vec<Filter>,
}

/// Models owned by one application, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppModels {
    pub app_name: String,
    pub model_names: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogModel {
    pub name: String,
    pub full_name: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogApp {
    pub app_name: String,
    pub models: Vec<CatalogModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedCatalog {
    apps: Vec<CatalogApp>,
}

impl ResolvedCatalog {
    /// Pair every listed model with its registry entry and precompute its
    /// default link.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownModel`] for the first listed model that
    /// `all_model_fields` does not know.
    pub fn resolve(
        sorted_models: &[AppModels],
        all_model_fields: &ModelFieldRegistry,
        default_row_limit: RowLimit,
    ) -> Result<Self, CatalogError> {
        let apps = sorted_models
            .iter()
            .map(|group| {
                let models = group
                    .model_names
                    .iter()
                    .map(|model_name| {
                        let full_name = full_model_name(&group.app_name, model_name);
                        let fields = all_model_fields
                            .get(&full_name)
                            .ok_or_else(|| CatalogError::UnknownModel(full_name.clone()))?;
                        let link = rel_url_for_query(&default_query(&full_name, fields, default_row_limit), OutputFormat::Html);
                        Ok(CatalogModel { name: model_name.clone(), full_name, link })
                    })
                    .collect::<Result<Vec<_>, CatalogError>>()?;
                Ok(CatalogApp { app_name: group.app_name.clone(), models })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { apps })
    }

    #[must_use]
    pub fn apps(&self) -> &[CatalogApp] {
        &self.apps
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

#[must_use]
pub fn full_model_name(app_name: &str, model_name: &str) -> String {
    format!("{app_name}.{model_name}")
}

/// The query a model link opens: all fields, the model's default filters,
/// and the configured row limit.
#[must_use]
pub fn default_query(full_name: &str, fields: &ModelFields, limit: RowLimit) -> QueryDescriptor {
    QueryDescriptor::new(full_name)
        .with_filters(fields.default_filters.clone())
        .with_limit(limit)
}
