//! Wire types returned by the data browser backend.
//!
//! DESIGN
//! ======
//! Saved views are produced by the backend and treated as read-only here; the
//! UI only derives display text and the edit route from them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Display text for a saved view without a name.
pub const UNNAMED_VIEW: &str = "<unnamed>";

/// A persisted query a user can reopen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedView {
    pub pk: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub model: String,
    /// Precomputed router-relative query URL.
    pub link: String,
}

impl SavedView {
    /// The view's name, or [`UNNAMED_VIEW`] when it is absent or empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or(UNNAMED_VIEW)
    }

    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Route of the saved view's edit page.
    #[must_use]
    pub fn edit_link(&self) -> String {
        format!("/views/{}.html", self.pk)
    }
}
