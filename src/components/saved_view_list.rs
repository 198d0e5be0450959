//! Saved views fetched from the backend, with activate and edit links.
//!
//! DESIGN
//! ======
//! Nothing renders until the list has loaded; there is no loading indicator
//! and a failed fetch also renders nothing. Views keep the order the backend
//! returned them in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::saved_views_endpoint;
use crate::net::fetch::{FetchState, use_data};
use crate::net::types::SavedView;
use crate::state::saved_view::{activate_saved_view, use_current_saved_view};

#[component]
pub fn SavedViewList(#[prop(into)] base_url: Signal<String>) -> impl IntoView {
    let endpoint = Signal::derive(move || saved_views_endpoint(&base_url.get()));
    let saved_views = use_data::<Vec<SavedView>>(endpoint);

    move || {
        let FetchState::Loaded(views) = saved_views.get() else {
            return ().into_any();
        };
        view! {
            <div class="SavedViewList">
                <h1>"Saved Views"</h1>
                {views
                    .into_iter()
                    .map(|saved_view| view! { <SavedViewEntry saved_view=saved_view/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn SavedViewEntry(saved_view: SavedView) -> impl IntoView {
    let current = use_current_saved_view();
    let navigate = use_navigate();

    let name = saved_view.display_name().to_owned();
    let link = saved_view.link.clone();
    let edit_link = saved_view.edit_link();
    let model = saved_view.model.clone();
    let description = saved_view.description_text().to_owned();

    let on_activate = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        activate_saved_view(current, saved_view.clone(), |href| {
            navigate(href, NavigateOptions::default());
        });
    };

    view! {
        <div class="SavedViewList__entry">
            <h2>
                <A href=link attr:class="Link" on:click=on_activate>
                    {name}
                </A>
            </h2>
            <p>"on " {model} " - " <A href=edit_link>"edit"</A></p>
            <p>{description}</p>
        </div>
    }
}
