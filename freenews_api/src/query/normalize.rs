//! Converts parameter entries into the wire-ready query string.

use url::{form_urlencoded, Url};

use super::ParamValue;

/// Name of the parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apikey";

/// Ordered `(key, value)` pairs ready for URL encoding.
///
/// Entries with absent values are dropped, any caller-supplied `apikey`
/// entry is discarded and the configured key is appended last, so the key
/// appears exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedQuery {
    pairs: Vec<(String, String)>,
}

impl NormalizedQuery {
    pub fn new<I, K>(params: I, api_key: &str) -> Self
    where
        I: IntoIterator<Item = (K, Option<ParamValue>)>,
        K: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = params
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.into();
                if key == API_KEY_PARAM {
                    return None;
                }
                value.map(|v| (key, v.render()))
            })
            .collect();
        pairs.push((API_KEY_PARAM.to_string(), api_key.to_string()));
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Form-encodes the pairs in order (`application/x-www-form-urlencoded`).
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Returns a copy of `url` whose query string is this query.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.set_query(Some(&self.encode()));
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_are_dropped() {
        let query = NormalizedQuery::new(
            vec![
                ("q", Some(ParamValue::from("tesla"))),
                ("country", None),
                ("max", Some(ParamValue::from(5i64))),
            ],
            "k",
        );
        assert_eq!(query.get("country"), None);
        assert!(!query.encode().contains("country"));
        assert_eq!(query.encode(), "q=tesla&max=5&apikey=k");
    }

    #[test]
    fn empty_list_is_kept_as_empty_string() {
        let query = NormalizedQuery::new(vec![("lang", Some(ParamValue::List(vec![])))], "k");
        assert_eq!(query.get("lang"), Some(""));
        assert_eq!(query.encode(), "lang=&apikey=k");
    }

    #[test]
    fn caller_api_key_is_overridden() {
        let query = NormalizedQuery::new(
            vec![
                ("apikey", Some(ParamValue::from("spoofed"))),
                ("q", Some(ParamValue::from("x"))),
                ("apikey", None),
            ],
            "configured",
        );
        let keys: Vec<_> = query
            .pairs()
            .iter()
            .filter(|(k, _)| k == API_KEY_PARAM)
            .collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(query.pairs().last().unwrap().1, "configured");
    }

    #[test]
    fn encoding_escapes_reserved_characters() {
        let query = NormalizedQuery::new(
            vec![
                ("q", Some(ParamValue::from("a&b=c d"))),
                ("lang", Some(ParamValue::from(vec!["en", "fr"]))),
            ],
            "k/+",
        );
        insta::assert_snapshot!(query.encode(), @"q=a%26b%3Dc+d&lang=en%2Cfr&apikey=k%2F%2B");
    }

    #[test]
    fn add_to_url_replaces_existing_query() {
        let url = Url::parse("https://example.com/v1/search?stale=1").unwrap();
        let query = NormalizedQuery::new(vec![("q", Some(ParamValue::from("x")))], "k");
        assert_eq!(
            query.add_to_url(&url).as_str(),
            "https://example.com/v1/search?q=x&apikey=k"
        );
    }
}
