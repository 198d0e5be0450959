//! Shared client state provided to the component tree via context.

pub mod saved_view;
