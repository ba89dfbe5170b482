use serde::Deserialize;
use std::sync::{Mutex, OnceLock};
use thiserror::Error;
use url::Url;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Client settings with environment variable support
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the blog backend, e.g. `http://localhost:8080`
    pub api_base_url: String,

    /// Directory holding the persisted session entries
    pub session_dir: String,

    // HTTP
    pub http_timeout_secs: u64,

    // Logging
    pub log_level: String,
    pub log_format: String,
}

impl Settings {
    /// Create new settings instance from environment variables and .env file
    pub fn new() -> Result<Self, ConfigError> {
        Self::new_with_env_file(true)
    }

    /// Create new settings instance with optional .env file loading
    pub fn new_with_env_file(load_env_file: bool) -> Result<Self, ConfigError> {
        // Serialize settings construction to avoid cross-test environment races
        // Tests frequently mutate process env; locking ensures consistent reads
        static SETTINGS_BUILD_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
        let build_mutex = SETTINGS_BUILD_MUTEX.get_or_init(|| Mutex::new(()));
        let _guard = build_mutex
            .lock()
            .expect("Failed to lock settings build mutex");

        // Load .env file if it exists and requested (skip during tests for determinism)
        #[cfg(not(test))]
        {
            if load_env_file {
                dotenvy::dotenv().ok();
            }
        }
        #[cfg(test)]
        let _ = load_env_file;

        let mut builder = config::Config::builder()
            .set_default("api_base_url", "http://localhost:8080")?
            .set_default("session_dir", ".blog-session")?
            .set_default("http_timeout_secs", 30u64)?
            .set_default("log_level", "info")?
            .set_default("log_format", "plain")?;

        // Apply environment overrides using explicit, uppercase-only mapping
        fn read_env(key: &str) -> Option<String> {
            std::env::var(key).ok()
        }

        if let Some(v) = read_env("BLOG_API_BASE_URL") {
            builder = builder.set_override("api_base_url", v)?;
        }
        if let Some(v) = read_env("BLOG_SESSION_DIR") {
            builder = builder.set_override("session_dir", v)?;
        }
        if let Some(v) = read_env("BLOG_HTTP_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            builder = builder.set_override("http_timeout_secs", v)?;
        }
        if let Some(v) = read_env("BLOG_LOG_LEVEL") {
            builder = builder.set_override("log_level", v)?;
        }
        if let Some(v) = read_env("BLOG_LOG_FORMAT") {
            builder = builder.set_override("log_format", v)?;
        }

        let settings = builder.build()?;

        let config: Settings = settings.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            ConfigError::Validation(format!("api_base_url is not a valid URL: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(
                "api_base_url must use http or https".to_string(),
            ));
        }

        if self.session_dir.is_empty() {
            return Err(ConfigError::Validation(
                "session_dir must not be empty".to_string(),
            ));
        }

        if self.http_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.log_format.as_str(), "json" | "plain") {
            return Err(ConfigError::Validation(
                "log_format must be 'json' or 'plain'".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed, ready for path concatenation
    pub fn base_url(&self) -> String {
        self.api_base_url.trim_end_matches('/').to_string()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new().expect("Failed to create default settings")
    }
}
