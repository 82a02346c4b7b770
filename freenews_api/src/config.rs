//! Client configuration: API key, base URL and request timeout.

use std::time::Duration;

use crate::Error;

/// Production endpoint of the Free News API.
pub const DEFAULT_BASE_URL: &str = "https://api.freenewsapi.com";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Immutable client settings. Build with [`ClientConfig::new`] and the
/// `with_*` methods, then hand to [`crate::Client::new`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with the default base URL and timeout.
    ///
    /// Fails with [`Error::MissingApiKey`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Points the client at a different host. Used for testing with wiremock.
    /// A trailing slash is ignored.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
