use crate::constants::{
    ACTOR_BASE_URL, DEFAULT_LOG_FILTER, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_REQUEST_TIMEOUT_MS,
    ENV_APIFY_API_TOKEN, ENV_ENDPOINT, ENV_LOG, ENV_MAX_RESPONSE_BYTES, MIN_MAX_RESPONSE_BYTES,
};
use crate::error::AppError;
use reqwest::header::HeaderValue;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub endpoint: String,
    pub request_timeout_ms: u64,
    pub max_response_bytes: usize,
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            endpoint: ACTOR_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let endpoint = get_env_trimmed(ENV_ENDPOINT).unwrap_or(defaults.endpoint);
        let max_response_bytes = get_env_usize(ENV_MAX_RESPONSE_BYTES)
            .unwrap_or(defaults.max_response_bytes)
            .max(MIN_MAX_RESPONSE_BYTES);
        let log_filter = std::env::var(ENV_LOG).unwrap_or(defaults.log_filter);

        Self {
            endpoint,
            request_timeout_ms: defaults.request_timeout_ms,
            max_response_bytes,
            log_filter,
        }
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Apify API token. Read once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct ApiToken {
    value: String,
    source: TokenSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Environment,
    CommandLine,
    Explicit,
}

impl ApiToken {
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        Self::checked(value.into().trim(), TokenSource::Explicit)
    }

    /// Looks in `APIFY_API_TOKEN` first, then for an `APIFY_API_TOKEN=<token>`
    /// command-line argument. Blank values are treated as missing.
    pub fn resolve<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(value) = get_env_trimmed(ENV_APIFY_API_TOKEN) {
            return Self::checked(&value, TokenSource::Environment);
        }

        let prefix = format!("{ENV_APIFY_API_TOKEN}=");
        let value = args
            .into_iter()
            .find_map(|arg| {
                arg.as_ref()
                    .strip_prefix(&prefix)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
            })
            .ok_or(AppError::MissingApiToken)?;
        Self::checked(&value, TokenSource::CommandLine)
    }

    /// The token must be usable as an `Authorization` header value.
    fn checked(value: &str, source: TokenSource) -> Result<Self, AppError> {
        if value.is_empty() {
            return Err(AppError::MissingApiToken);
        }
        HeaderValue::from_str(&format!("Bearer {value}"))
            .map_err(|error| AppError::InvalidApiToken(error.to_string()))?;
        Ok(Self {
            value: value.to_string(),
            source,
        })
    }

    #[must_use]
    pub fn source(&self) -> TokenSource {
        self.source
    }

    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiToken")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

fn get_env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn get_env_usize(name: &str) -> Option<usize> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
}
