mod article;
pub use self::article::{Article, SearchResponse, Source};

mod result;
pub use self::result::ApiResult;
