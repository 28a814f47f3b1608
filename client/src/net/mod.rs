//! Networking modules for the campsite JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side HTTP calls and `types` defines the wire
//! schema shared with the host crate.

pub mod api;
pub mod types;
