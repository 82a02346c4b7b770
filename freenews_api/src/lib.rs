mod client;
mod config;
mod dispatch;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, Endpoint};
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::dispatch::{default_error_message, resolve_error_message};
pub use self::errors::Error;
pub use self::query::{
    NormalizedQuery, ParamValue, ResponseFormat, SearchQuery, SortBy, UnknownOption,
    API_KEY_PARAM,
};
