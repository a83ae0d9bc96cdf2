//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::shared::config::{load_config, Config};
use once_cell::sync::Lazy;

/// localStorage key that overrides the configured API base URL
pub const API_BASE_STORAGE_KEY: &str = "gestion_api_base";

static CONFIG: Lazy<Config> = Lazy::new(|| {
    let config = load_config(None).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid, using defaults: {}", e);
        Config::default()
    });
    match stored_base_url() {
        Some(base) => {
            log::info!("API base overridden from localStorage: {}", base);
            config.with_base_url(&base)
        }
        None => config,
    }
});

fn stored_base_url() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(API_BASE_STORAGE_KEY)
        .ok()?
}

/// Get the base URL for API requests, e.g. "http://localhost:8080"
pub fn api_base() -> String {
    CONFIG.api.base_url.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/produccion/materiales");
/// ```
pub fn api_url(path: &str) -> String {
    CONFIG.url(path)
}
