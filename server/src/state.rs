//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the campsite store behind an async `RwLock`; handlers take the lock
//! only for the duration of a store call.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::campsite::CampsiteStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<CampsiteStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: CampsiteStore) -> Self {
        Self { store: Arc::new(RwLock::new(store)) }
    }
}
