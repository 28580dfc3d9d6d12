/// Web UI configuration loaded from environment variables.
///
/// The API origin is not configurable; see [`crate::api::API_BASE_URL`].
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5173`).
    pub port: u16,
}

/// Errors raised while reading [`WebConfig`].
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl WebConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var    | Default   |
    /// |------------|-----------|
    /// | `WEB_HOST` | `0.0.0.0` |
    /// | `WEB_PORT` | `5173`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("WEB_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError {
                var: "WEB_PORT",
                value,
            })?,
            None => 5173,
        };
        Ok(Self { host, port })
    }
}
