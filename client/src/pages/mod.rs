//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, fetches, posting) and
//! delegates rendering details to `components`.

pub mod campsite_info;
pub mod directory;
