//! Request Dispatcher: performs the GET and classifies the response.

use std::error::Error as _;

use serde_json::Value;
use url::Url;

use crate::{types::ApiResult, Error};

/// Default message for a failed HTTP status, used when the body carries no
/// better explanation.
pub fn default_error_message(status: u16) -> String {
    match status {
        400 => "Bad Request - invalid request".to_string(),
        401 => "Unauthorized - invalid API key or inactive account".to_string(),
        403 => "Forbidden - not authorized for that request".to_string(),
        429 => "Too Many Requests - daily limit reached, resets 00:00 UTC".to_string(),
        500 => "Internal Server Error - try again later".to_string(),
        503 => "Service Unavailable - maintenance, try again later".to_string(),
        other => format!("Unknown error with status code: {}", other),
    }
}

/// Picks the message for a failed response: `detail.message` beats
/// `message`, which beats the status default. Bodies that are not JSON keep
/// the default.
pub fn resolve_error_message(status: u16, body: &[u8]) -> String {
    let mut message = default_error_message(status);
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if let Some(m) = value.get("message").and_then(Value::as_str) {
            message = m.to_string();
        }
        if let Some(m) = value
            .get("detail")
            .and_then(|detail| detail.get("message"))
            .and_then(Value::as_str)
        {
            message = m.to_string();
        }
    }
    message
}

/// Transport error text with its source chain. The URL is stripped so the
/// API key never ends up in messages or logs.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Sends one GET to `url` and returns the parsed or raw body.
///
/// Every failure is reported as [`Error::Api`]; transport problems and
/// unparseable JSON bodies use status 500.
pub(crate) async fn dispatch(
    http: &reqwest::Client,
    url: Url,
    expects_json: bool,
) -> Result<ApiResult, Error> {
    tracing::debug!("GET {} (json: {})", url.path(), expects_json);

    let resp = http.get(url).send().await.map_err(|e| {
        let details = describe(e);
        tracing::error!("Failed to send request: {}", details);
        Error::request_failed(details)
    })?;

    let status = resp.status();
    let body = resp.bytes().await.map_err(|e| {
        let details = describe(e);
        tracing::error!("Failed to read response body: {}", details);
        Error::request_failed(details)
    })?;

    if !status.is_success() {
        let message = resolve_error_message(status.as_u16(), &body);
        tracing::error!("Request failed with status {}: {}", status, message);
        return Err(Error::Api {
            status_code: status.as_u16(),
            message,
        });
    }

    if !expects_json {
        return Ok(ApiResult::Raw(body.to_vec()));
    }

    let parsed = serde_json::from_slice::<Value>(&body).map_err(|e| {
        tracing::error!("Failed to parse response body: {}", e);
        Error::request_failed(e)
    })?;
    Ok(ApiResult::Structured(parsed))
}
