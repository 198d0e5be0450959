//! Reusable UI components for the data browser landing page.

pub mod app_models;
pub mod saved_view_list;
