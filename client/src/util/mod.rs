//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (validation rules, date formatting, asset URLs) kept apart from
//! components so they can be unit tested without a reactive runtime.

pub mod config;
pub mod date_format;
pub mod validation;
