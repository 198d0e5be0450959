//! Home page listing models by application plus the user's saved views.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. No saved view is active while it is shown, so
//! entering it clears the shared `CurrentSavedView`. Leptos runs a component
//! body once per mount, which makes that clear an on-enter hook rather than a
//! per-render write.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::app_models::AppModelList;
use crate::components::saved_view_list::SavedViewList;
use crate::config::CatalogConfig;
use crate::state::saved_view::{CurrentSavedView, use_current_saved_view};

/// Model catalog page.
#[component]
pub fn HomePage(config: CatalogConfig) -> impl IntoView {
    enter_catalog(use_current_saved_view());

    let catalog = match config.resolve_catalog() {
        Ok(catalog) => view! {
            <div>
                {catalog
                    .apps()
                    .iter()
                    .cloned()
                    .map(|app| view! { <AppModelList app=app/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(e) => {
            leptos::logging::warn!("model catalog unavailable: {e}");
            view! { <p class="HomePage__error">{e.to_string()}</p> }.into_any()
        }
    };

    view! {
        <div class="HomePage">
            <div>
                <h1>"Models"</h1>
                {catalog}
            </div>
            <SavedViewList base_url=config.base_url/>
        </div>
    }
}

/// Page-entry hook: nothing is active on the catalog.
pub fn enter_catalog(current: CurrentSavedView) {
    current.clear();
}
