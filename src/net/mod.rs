//! Networking modules for the saved-view REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints and performs JSON GETs, `fetch` wraps those calls in
//! a reactive subscription for components, and `types` defines the wire schema.

pub mod api;
pub mod fetch;
pub mod types;
