//! Networking modules for the contact submission boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the wire schema shared
//! with the server crate.

pub mod api;
pub mod types;
