//! Error types for the API client.

/// Errors that can occur when configuring the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was constructed without an API key. Raised before any
    /// network activity.
    #[error("API key is required")]
    MissingApiKey,
    /// Any failed request: non-success HTTP status, transport failure
    /// (reported with status 500), or a malformed success body.
    #[error("NewsAPI Error ({status_code}): {message}")]
    Api { status_code: u16, message: String },
    /// Structured data could not be decoded into the typed response model.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Structured data was requested from a raw (csv/xlsx) payload.
    #[error("Expected a JSON payload but received raw bytes")]
    UnexpectedPayload,
}

impl Error {
    pub(crate) fn request_failed(details: impl std::fmt::Display) -> Self {
        Error::Api {
            status_code: 500,
            message: format!("Request failed: {}", details),
        }
    }

    /// HTTP-style status code for API errors. `None` for configuration and
    /// decode errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Human-readable message without the status prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
