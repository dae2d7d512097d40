use std::env;

use thiserror::Error;

/// Process configuration, read once at startup and injected from `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared secret expected in the `x-api-key` header.
    pub api_key: String,
    /// Postgres connection string.
    pub database_url: String,
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_SECRET_KEY is unset or empty; refusing to start with authentication disabled")]
    MissingApiKey,

    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

const DEFAULT_PORT: u16 = 3000;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::var("API_SECRET_KEY").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("PORT").ok(),
        )
    }

    /// An empty secret would make an absent header authenticate, so it is
    /// rejected here rather than compared at request time.
    fn from_parts(
        api_key: Option<String>,
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let database_url = database_url.ok_or(ConfigError::MissingDatabaseUrl)?;

        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            database_url,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn accepts_complete_configuration() {
        let config = AppConfig::from_parts(
            some("secret"),
            some("postgres://localhost/posts"),
            some("8080"),
        )
        .unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn defaults_port_when_unset() {
        let config =
            AppConfig::from_parts(some("secret"), some("postgres://localhost/posts"), None)
                .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn rejects_missing_api_key() {
        let result = AppConfig::from_parts(None, some("postgres://localhost/posts"), None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn rejects_empty_api_key() {
        let result = AppConfig::from_parts(some(""), some("postgres://localhost/posts"), None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn rejects_missing_database_url() {
        let result = AppConfig::from_parts(some("secret"), None, None);
        assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
    }

    #[test]
    fn rejects_unparseable_port() {
        let result = AppConfig::from_parts(some("secret"), some("postgres://x"), some("nope"));
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }
}
