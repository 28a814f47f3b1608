//! Client configuration provided through Leptos context.
//!
//! The asset base URL is fixed at compile time (`CAMPSITE_ASSET_BASE_URL`) so
//! SSR and hydrated renders produce identical image URLs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ASSET_BASE_URL: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub asset_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(option_env!("CAMPSITE_ASSET_BASE_URL").unwrap_or(DEFAULT_ASSET_BASE_URL))
    }
}

impl ClientConfig {
    pub fn new(asset_base_url: &str) -> Self {
        let mut base = asset_base_url.trim().to_owned();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { asset_base_url: base }
    }

    /// Resolve a campsite image path against the asset base URL.
    pub fn image_url(&self, path: &str) -> String {
        format!("{}{}", self.asset_base_url, path.trim_start_matches('/'))
    }
}
