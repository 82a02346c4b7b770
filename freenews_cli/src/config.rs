//! Client configuration from flags and the environment (`.env` supported).

use std::time::Duration;

use anyhow::{Context, Result};
use freenews_api::ClientConfig;

pub const API_KEY_VAR: &str = "FREENEWS_API_KEY";
pub const BASE_URL_VAR: &str = "FREENEWS_BASE_URL";
pub const TIMEOUT_VAR: &str = "FREENEWS_TIMEOUT_SECS";

/// Builds the client configuration. Flags win over environment variables;
/// a missing key surfaces as the library's missing-key error.
pub fn resolve_config<F>(
    api_key: Option<&str>,
    timeout_secs: Option<u64>,
    env: F,
) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let key = match api_key {
        Some(key) => key.to_string(),
        None => env(API_KEY_VAR).unwrap_or_default(),
    };
    let mut config = ClientConfig::new(key)
        .with_context(|| format!("Pass --api-key or set {}", API_KEY_VAR))?;

    if let Some(base_url) = env(BASE_URL_VAR).filter(|s| !s.is_empty()) {
        config = config.with_base_url(&base_url);
    }

    let timeout = match timeout_secs {
        Some(secs) => Some(secs),
        None => env(TIMEOUT_VAR)
            .map(|raw| {
                raw.parse::<u64>()
                    .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_VAR))
            })
            .transpose()?,
    };
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}

/// [`resolve_config`] against the process environment.
pub fn from_env(api_key: Option<&str>, timeout_secs: Option<u64>) -> Result<ClientConfig> {
    resolve_config(api_key, timeout_secs, |name| std::env::var(name).ok())
}
