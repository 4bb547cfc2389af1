use std::path::PathBuf;

const DEFAULT_EXTRACT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Server configuration - every tunable of the dispatch node
///
/// # Environment variables
///
/// Every field can be overridden via environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/dispatch | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | EXTRACT_API_URL | Gemini generateContent endpoint | Text-extraction collaborator |
/// | EXTRACT_API_KEY | (unset) | Collaborator API key; extraction disabled without it |
/// | REQUEST_TIMEOUT_MS | 30000 | Outbound HTTP request timeout |
/// | LONG_POLL_TIMEOUT_MS | 25000 | Default wait for /api/orders/updates |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/dispatch HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Text-extraction collaborator endpoint
    pub extract_api_url: String,
    /// Collaborator API key; None disables the extraction endpoint
    pub extract_api_key: Option<String>,
    /// Outbound request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Default long-poll wait (milliseconds)
    pub long_poll_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/dispatch".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            extract_api_url: std::env::var("EXTRACT_API_URL")
                .unwrap_or_else(|_| DEFAULT_EXTRACT_API_URL.into()),
            extract_api_key: std::env::var("EXTRACT_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            long_poll_timeout_ms: std::env::var("LONG_POLL_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(25000),
        }
    }

    /// Override selected fields, keeping the rest from the environment
    ///
    /// Mostly used in tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Path of the order database inside the working directory
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("orders.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
