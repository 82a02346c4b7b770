use freenews_api::types::{ApiResult, SearchResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_full() {
    let json = load_fixture("search.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total_articles, 2);
    assert_eq!(resp.articles.len(), 2);

    let first = &resp.articles[0];
    assert_eq!(first.title, "Bitcoin climbs past record high");
    assert_eq!(first.url, "https://news.example.com/markets/bitcoin-record");
    assert_eq!(first.source.name, "Example Markets");
    assert_eq!(first.source.url.as_deref(), Some("https://news.example.com"));
    assert_eq!(first.published_at.as_deref(), Some("2024-03-04T09:15:00Z"));
    assert!(first.image.is_some());
}

#[test]
fn deserialize_article_with_only_required_fields() {
    let json = load_fixture("search.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();

    let second = &resp.articles[1];
    assert_eq!(second.source.name, "Example Wire");
    assert!(second.description.is_none());
    assert!(second.content.is_none());
    assert!(second.image.is_none());
    assert!(second.source.url.is_none());
}

#[test]
fn deserialize_search_empty() {
    let json = load_fixture("search_empty.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total_articles, 0);
    assert!(resp.articles.is_empty());
}

#[test]
fn structured_result_preserves_article_order() {
    let value: serde_json::Value = serde_json::from_str(&load_fixture("search.json")).unwrap();
    let resp = ApiResult::Structured(value).into_response().unwrap();
    let titles: Vec<_> = resp.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Bitcoin climbs past record high",
            "Regulators weigh new crypto rules"
        ]
    );
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"totalArticles": 1, "articles": [{"title": "No source", "url": "https://x"}]}"#;
    let result = serde_json::from_str::<SearchResponse>(json);
    assert!(result.is_err());
}
