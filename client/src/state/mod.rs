//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Page data (`campsite`) and form interaction state (`comment_form`) are kept
//! separate so a re-fetch never clobbers an in-progress draft.

pub mod campsite;
pub mod comment_form;
