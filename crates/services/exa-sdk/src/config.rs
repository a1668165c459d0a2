use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

/// Default Exa API base URL
pub const EXA_DEFAULT_BASE: &str = "https://api.exa.ai";
/// Header name for API key authentication
pub const HDR_X_API_KEY: &str = "x-api-key";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "EXA_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "EXA_BASE_URL";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("exa-sdk-rs/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Exa client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct ExaConfig {
    api_base: String,
    api_key: Option<SecretString>,
    user_agent: String,
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for ExaConfig {
    fn default() -> Self {
        Self {
            api_base: env_trimmed(ENV_BASE_URL).unwrap_or_else(|| EXA_DEFAULT_BASE.into()),
            api_key: env_trimmed(ENV_API_KEY).map(SecretString::from),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl ExaConfig {
    /// Creates a new configuration with default settings
    ///
    /// Reads `EXA_API_KEY` and `EXA_BASE_URL` (defaults to `https://api.exa.ai`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Overrides the user agent header
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the configured user agent
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Configuration trait for the Exa client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::ExaError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in requests
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::ExaError>;
}

impl Config for ExaConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::ExaError> {
        use crate::error::ExaError;

        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        h.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(|_| ExaError::Config("Invalid user-agent value".into()))?,
        );

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                h.insert(
                    HDR_X_API_KEY,
                    HeaderValue::from_str(key)
                        .map_err(|_| ExaError::Config("Invalid x-api-key value".into()))?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn validate_auth(&self) -> Result<(), crate::error::ExaError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::ExaError::Config(
                "Missing Exa credentials: set EXA_API_KEY environment variable or call with_api_key"
                    .into(),
            )),
        }
    }
}
