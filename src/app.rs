//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{CONFIG_ELEMENT_ID, CatalogConfig};
use crate::pages::home::HomePage;
use crate::state::saved_view::CurrentSavedView;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The page config is embedded as JSON so `hydrate()` can rebuild the same
/// `App` in the browser.
pub fn shell(options: LeptosOptions, config: CatalogConfig) -> impl IntoView {
    let embedded = config.to_embedded_json().unwrap_or_else(|e| {
        leptos::logging::warn!("failed to embed page config: {e}");
        String::from("{}")
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-session `CurrentSavedView` and sets up client-side
/// routing under the configured base URL.
#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(CurrentSavedView::new());

    let base = config.router_base();

    view! {
        <Stylesheet id="leptos" href="/pkg/data-browser.css"/>
        <Title text="Data Browser"/>

        <Router base=base>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <HomePage config=config.clone()/> }
                />
            </Routes>
        </Router>
    }
}
