//! Parameter Normalizer: typed query parameters and their wire encoding.

mod normalize;
pub use self::normalize::{NormalizedQuery, API_KEY_PARAM};
mod options;
pub use self::options::{ResponseFormat, SortBy, UnknownOption};
mod search;
pub use self::search::SearchQuery;
mod value;
pub use self::value::ParamValue;
