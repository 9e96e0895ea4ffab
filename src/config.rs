//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for the HTTP listen address, the echo input limit, auth defaults,
//! and logging. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Echo Input Limits
// =============================================================================

/// Maximum accepted length of the `input` query parameter, in bytes.
/// Inputs longer than this (or empty inputs) are rejected with 400.
pub const MAX_INPUT_BYTES: usize = 50;

// =============================================================================
// Authentication Defaults
// =============================================================================

/// Authorization scheme expected on inbound requests
pub const BEARER_SCHEME: &str = "Bearer";

/// Default shared-secret token when neither config nor SECRET_KEY provide one
pub const DEFAULT_AUTH_TOKEN: &str = "securetoken123";

/// Full default `Authorization` header value (compile-time concatenation)
pub const DEFAULT_BEARER_VALUE: &str = formatcp!("{} {}", BEARER_SCHEME, DEFAULT_AUTH_TOKEN);

/// Environment variable that overrides the configured token when set
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Echo responses are credentialed and must never be cached by intermediaries
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "echod=debug,tower_http=debug";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Bearer-token authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

/// Bearer-token authentication settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared-secret token clients must present as `Authorization: Bearer <token>`
    #[serde(default = "AuthConfig::default_token")]
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: Self::default_token(),
        }
    }
}

impl AuthConfig {
    fn default_token() -> String {
        DEFAULT_AUTH_TOKEN.to_string()
    }

    /// The full header value clients must present, `"Bearer <token>"`.
    pub fn bearer_value(&self) -> String {
        format!("{} {}", BEARER_SCHEME, self.token)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist. The `SECRET_KEY` environment variable, when set,
    /// overrides the configured auth token.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_sources(path, std::env::var(SECRET_KEY_ENV).ok())
    }

    /// Load from explicit sources. Split out from [`load`](Self::load) so
    /// tests can supply the env override without touching process state.
    pub fn from_sources<P: AsRef<Path>>(
        path: P,
        secret_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config: AppConfig = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            AppConfig::default()
        };

        if let Some(token) = secret_key {
            config.auth.token = token;
        }

        // Startup is fatal on an empty token: the service must never run
        // with an unauthenticated echo endpoint.
        if config.auth.token.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Auth token is empty. Set [auth] token in the config file or the {} environment variable",
                SECRET_KEY_ENV
            )));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
