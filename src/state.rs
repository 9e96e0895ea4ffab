//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the application configuration and the expected `Authorization`
/// header value, precomputed once at startup so the auth middleware does no
/// per-request formatting.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub expected_bearer: Arc<str>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let expected_bearer = config.auth.bearer_value().into();
        Self {
            config: Arc::new(config),
            expected_bearer,
        }
    }
}
