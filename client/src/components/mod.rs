//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the campsite page from props; page-level data
//! fetching stays in `pages`.

pub mod campsite_card;
pub mod comment_form;
pub mod comment_list;
pub mod loading;
