//! One application heading and links to its models' default views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::CatalogApp;

#[component]
pub fn AppModelList(app: CatalogApp) -> impl IntoView {
    let CatalogApp { app_name, models } = app;

    view! {
        <h2>{app_name}</h2>
        <div class="AppModels">
            {models
                .into_iter()
                .map(|model| {
                    view! {
                        <h2>
                            <A href=model.link attr:class="Link">
                                {model.name}
                            </A>
                        </h2>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
