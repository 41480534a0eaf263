use std::env;
use std::fmt;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings, read from the environment (and `.env` via `dotenv`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub cors_allowed_origin: String,
    pub database_max_connections: u32,
    pub workers: usize,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has an invalid value: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            Some(url) => return Err(ConfigError::Invalid { key: "DATABASE_URL", value: url }),
            None => return Err(ConfigError::Missing("DATABASE_URL")),
        };

        let bind_address = non_empty(&lookup, "BIND_ADDRESS")?
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let cors_allowed_origin = non_empty(&lookup, "CORS_ALLOWED_ORIGIN")?
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string());

        let database_max_connections = match non_empty(&lookup, "DATABASE_MAX_CONNECTIONS")? {
            Some(raw) => parse_positive(raw, "DATABASE_MAX_CONNECTIONS")?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        let workers = match non_empty(&lookup, "WORKERS")? {
            Some(raw) => parse_positive(raw, "WORKERS")?,
            None => num_cpus::get(),
        };

        Ok(AppConfig {
            database_url,
            bind_address,
            cors_allowed_origin,
            database_max_connections,
            workers,
        })
    }
}

// Unset is fine, set-but-blank is not.
fn non_empty<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Invalid { key, value }),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

fn parse_positive<T>(raw: String, key: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}
