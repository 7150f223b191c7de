//! Runtime configuration: backend URLs and request timeout.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Clients are built from a [`Config`] and passed to whoever needs them;
//! nothing is constructed at load time.

use std::time::Duration;

use comedor_api::{ApiError, BiClient, Client, DEFAULT_API_URL, DEFAULT_BI_URL, DEFAULT_TIMEOUT};
use url::Url;

pub const API_URL_VAR: &str = "COMEDOR_API_URL";
pub const BI_URL_VAR: &str = "COMEDOR_BI_URL";
pub const TIMEOUT_VAR: &str = "COMEDOR_TIMEOUT_SECS";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{key} is not a valid http(s) URL: '{value}'")]
    InvalidUrl { key: &'static str, value: String },
    #[error("failed to build client: {0}")]
    Client(#[from] ApiError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the REST backend, including the `/api/v1` prefix.
    pub api_url: String,
    /// Base URL serving the `/api/bi/*` routes.
    pub bi_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bi_url: DEFAULT_BI_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset or blank
    /// variables take their defaults; an unparsable timeout falls back to the
    /// default with a warning; a malformed URL is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_url = url_var(&lookup, API_URL_VAR)?.unwrap_or(defaults.api_url);
        let bi_url = url_var(&lookup, BI_URL_VAR)?.unwrap_or(defaults.bi_url);
        let timeout = Duration::from_secs(secs_var(
            &lookup,
            TIMEOUT_VAR,
            defaults.timeout.as_secs(),
        ));
        Ok(Self {
            api_url,
            bi_url,
            timeout,
        })
    }

    /// REST client for the backend.
    pub fn client(&self) -> Result<Client, ConfigError> {
        Ok(Client::with_timeout(&self.api_url, self.timeout)?)
    }

    /// Client for the BI routes.
    pub fn bi_client(&self) -> Result<BiClient, ConfigError> {
        Ok(BiClient::new(Client::with_timeout(
            &self.bi_url,
            self.timeout,
        )?))
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn url_var<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = non_blank(lookup, key) else {
        return Ok(None);
    };
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(value)),
        _ => Err(ConfigError::InvalidUrl { key, value }),
    }
}

fn secs_var<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup, key) {
        None => default,
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                tracing::warn!(
                    "Ignoring {}='{}', using default of {}s",
                    key,
                    raw,
                    default
                );
                default
            }
        },
    }
}
