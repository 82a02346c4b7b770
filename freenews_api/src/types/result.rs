use crate::{types::SearchResponse, Error};

/// Successful outcome of a request. The variant is chosen by the requested
/// response format: `json` yields [`ApiResult::Structured`], anything else
/// [`ApiResult::Raw`].
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResult {
    Structured(serde_json::Value),
    Raw(Vec<u8>),
}

impl ApiResult {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ApiResult::Structured(value) => Some(value),
            ApiResult::Raw(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ApiResult::Structured(_) => None,
            ApiResult::Raw(bytes) => Some(bytes),
        }
    }

    /// Decodes structured data into the typed article listing.
    pub fn into_response(self) -> Result<SearchResponse, Error> {
        match self {
            ApiResult::Structured(value) => serde_json::from_value(value).map_err(|e| {
                tracing::error!("Failed to decode search response: {}", e);
                Error::Decode(e.to_string())
            }),
            ApiResult::Raw(_) => Err(Error::UnexpectedPayload),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn structured_decodes_into_response() {
        let result = ApiResult::Structured(json!({
            "totalArticles": 1,
            "articles": [{
                "title": "Headline",
                "url": "https://news.example/a",
                "source": { "name": "Example News" }
            }]
        }));
        let resp = result.into_response().unwrap();
        assert_eq!(resp.total_articles, 1);
        assert_eq!(resp.articles[0].source.name, "Example News");
        assert!(resp.articles[0].description.is_none());
    }

    #[test]
    fn missing_fields_report_decode_error() {
        let result = ApiResult::Structured(json!({ "articles": [] }));
        assert!(matches!(result.into_response(), Err(Error::Decode(_))));
    }

    #[test]
    fn raw_payload_is_not_decoded() {
        let result = ApiResult::Raw(b"title,url\n".to_vec());
        assert_eq!(result.as_bytes(), Some(&b"title,url\n"[..]));
        assert!(result.as_json().is_none());
        assert!(matches!(result.into_response(), Err(Error::UnexpectedPayload)));
    }
}
