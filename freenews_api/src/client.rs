//! HTTP client for the Free News API.

use url::Url;

use crate::{
    config::ClientConfig,
    dispatch::dispatch,
    query::SearchQuery,
    types::{ApiResult, SearchResponse},
    Error,
};

/// Endpoints that accept a [`SearchQuery`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Headlines,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "/v1/search",
            Endpoint::Headlines => "/v1/headlines",
        }
    }
}

/// HTTP client for the Free News API.
///
/// Holds the immutable configuration and one `reqwest::Client` built with
/// the configured timeout. Every call performs exactly one GET.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("freenews_api/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::request_failed(e)
            })?;
        Ok(Self { config, http })
    }

    /// Creates a client against the production API with default settings.
    pub fn with_api_key(api_key: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::new(api_key)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL for `endpoint`, including the encoded query and API key.
    pub fn build_url(&self, endpoint: Endpoint, query: &SearchQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.config.base_url(), endpoint.path()).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::request_failed(e)
            })?;
        Ok(query.normalize(self.config.api_key()).add_to_url(&url))
    }

    async fn get(&self, endpoint: Endpoint, query: &SearchQuery) -> Result<ApiResult, Error> {
        let url = self.build_url(endpoint, query)?;
        dispatch(&self.http, url, query.expects_json()).await
    }

    /// Searches all articles matching the query.
    pub async fn search(&self, query: &SearchQuery) -> Result<ApiResult, Error> {
        self.get(Endpoint::Search, query).await
    }

    /// Fetches top headlines matching the query.
    pub async fn headlines(&self, query: &SearchQuery) -> Result<ApiResult, Error> {
        self.get(Endpoint::Headlines, query).await
    }

    /// [`Client::search`] decoded into [`SearchResponse`]. Fails with
    /// [`Error::UnexpectedPayload`] if the query asks for a non-JSON format.
    pub async fn search_articles(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        self.search(query).await?.into_response()
    }

    /// [`Client::headlines`] decoded into [`SearchResponse`].
    pub async fn headline_articles(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        self.headlines(query).await?.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ResponseFormat;

    fn client() -> Client {
        Client::new(
            ClientConfig::new("test-api-key")
                .unwrap()
                .with_base_url("https://api.example.com"),
        )
        .unwrap()
    }

    #[test]
    fn empty_key_fails_before_network() {
        assert!(matches!(Client::with_api_key(""), Err(Error::MissingApiKey)));
    }

    #[test]
    fn headlines_url_uses_headlines_path() {
        let query = SearchQuery::default()
            .with_country("us")
            .with_category("business")
            .with_max(5);
        let url = client().build_url(Endpoint::Headlines, &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/headlines?country=us&category=business&max=5&apikey=test-api-key"
        );
    }

    #[test]
    fn search_and_headlines_differ_only_in_path() {
        let query = SearchQuery::default()
            .with_q("bitcoin")
            .with_lang("en")
            .with_format(ResponseFormat::Json);
        let client = client();
        let search = client.build_url(Endpoint::Search, &query).unwrap();
        let headlines = client.build_url(Endpoint::Headlines, &query).unwrap();
        assert_ne!(search, headlines);
        assert_eq!(search.path(), "/v1/search");
        assert_eq!(headlines.path(), "/v1/headlines");
        assert_eq!(search.query(), headlines.query());
    }

    #[test]
    fn default_client_targets_production() {
        let client = Client::with_api_key("k").unwrap();
        let url = client
            .build_url(Endpoint::Search, &SearchQuery::default())
            .unwrap();
        assert_eq!(url.as_str(), "https://api.freenewsapi.com/v1/search?apikey=k");
    }
}
