use crate::error::Error;

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "D2C_API_KEY";

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.dev2.cloud";

/// Client configuration: API key and base URL.
///
/// The key is resolved once, at construction — an explicit value wins,
/// otherwise the `D2C_API_KEY` environment variable is consulted. Neither
/// being set is a fatal configuration error raised before any request.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl Config {
    /// Build a configuration with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Resolve the API key from the `D2C_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_raw_values(None, std::env::var(API_KEY_ENV).ok().as_deref())
    }

    /// Build a Config from raw values (as they would come from the caller
    /// and the environment). Used directly in tests to avoid mutating
    /// process-global environment.
    pub fn from_raw_values(explicit: Option<&str>, env_value: Option<&str>) -> Result<Self, Error> {
        let api_key = explicit
            .filter(|s| !s.is_empty())
            .or(env_value.filter(|s| !s.is_empty()))
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "API key is required. Pass it directly or set the {API_KEY_ENV} environment variable."
                ))
            })?;

        Ok(Self::new(api_key))
    }

    /// Override the base URL (a trailing `/` is trimmed).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
