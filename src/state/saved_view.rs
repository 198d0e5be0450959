//! The saved view the user most recently activated, shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `CurrentSavedView` per page session. The home page
//! clears it on entry; activating a saved view writes it before navigating so
//! the destination page reads the new value on its first render. Any other
//! page (for example a view editor) may read it.

#[cfg(test)]
#[path = "saved_view_test.rs"]
mod saved_view_test;

use leptos::prelude::*;

use crate::net::types::SavedView;

/// Handle to the page-session saved-view cell.
#[derive(Clone, Copy, Debug)]
pub struct CurrentSavedView(RwSignal<Option<SavedView>>);

impl Default for CurrentSavedView {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrentSavedView {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Tracked read; re-runs the calling effect or view when the value changes.
    pub fn get(&self) -> Option<SavedView> {
        self.0.get()
    }

    pub fn get_untracked(&self) -> Option<SavedView> {
        self.0.get_untracked()
    }

    /// Replace the held view. Readers are only notified if the value changed.
    pub fn set(&self, view: Option<SavedView>) {
        self.0.maybe_update(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }

    pub fn clear(&self) {
        self.set(None);
    }
}

/// Context handle provided by `App`.
///
/// # Panics
///
/// Panics if called outside a tree rooted at `App`.
pub fn use_current_saved_view() -> CurrentSavedView {
    expect_context::<CurrentSavedView>()
}

/// Make `view` current, then hand its link to `navigate`.
pub fn activate_saved_view(current: CurrentSavedView, view: SavedView, navigate: impl FnOnce(&str)) {
    let link = view.link.clone();
    current.set(Some(view));
    navigate(&link);
}
