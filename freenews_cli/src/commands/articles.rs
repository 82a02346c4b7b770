use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::Args;
use freenews_api::types::ApiResult;
use freenews_api::{Client, Endpoint, ParamValue, ResponseFormat, SearchQuery, SortBy};

use crate::output::{
    print_articles_csv, print_articles_markdown, print_articles_table, print_json, write_raw,
    OutputFormat,
};

/// Arguments shared by the `search` and `headlines` subcommands.
#[derive(Args, Default)]
pub struct ArticlesArgs {
    /// Keywords to search for
    #[arg(long, short)]
    pub q: Option<String>,

    /// Only articles published on or after this date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Only articles published on or before this date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Include the full article content (`--content` alone means true)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub content: Option<bool>,

    /// Language code(s), comma-separated or repeated (e.g. en,fr)
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Country code(s), comma-separated or repeated
    #[arg(long, value_delimiter = ',')]
    pub country: Vec<String>,

    /// Region(s), comma-separated or repeated
    #[arg(long, value_delimiter = ',')]
    pub region: Vec<String>,

    /// Category/categories, comma-separated or repeated
    #[arg(long, value_delimiter = ',')]
    pub category: Vec<String>,

    /// Fields to match keywords in: title, description, content
    #[arg(long, value_delimiter = ',')]
    pub attributes: Vec<String>,

    /// Publisher(s), comma-separated or repeated
    #[arg(long, value_delimiter = ',')]
    pub publisher: Vec<String>,

    /// Maximum number of articles
    #[arg(long)]
    pub max: Option<i64>,

    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Sort field: publishedAt or relevance
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Response format requested from the API: json, csv, xlsx
    #[arg(long)]
    pub format: Option<String>,

    /// File to write csv/xlsx payloads to (defaults to stdout)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or a full RFC 3339 timestamp.
pub fn parse_date(input: &str) -> Result<ParamValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.into());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.into());
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d.into());
    }
    bail!(
        "Invalid date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
        input
    )
}

fn with_list(values: &[String]) -> Option<&[String]> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

pub fn build_query(args: &ArticlesArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::default();

    if let Some(ref q) = args.q {
        query = query.with_q(q);
    }
    if let Some(ref start) = args.start_date {
        query = query.with_start_date(parse_date(start)?);
    }
    if let Some(ref end) = args.end_date {
        query = query.with_end_date(parse_date(end)?);
    }
    if let Some(content) = args.content {
        query = query.with_content(content);
    }
    if let Some(langs) = with_list(&args.lang) {
        query = query.with_langs(langs);
    }
    if let Some(countries) = with_list(&args.country) {
        query = query.with_countries(countries);
    }
    if let Some(regions) = with_list(&args.region) {
        query = query.with_regions(regions);
    }
    if let Some(categories) = with_list(&args.category) {
        query = query.with_categories(categories);
    }
    if let Some(attributes) = with_list(&args.attributes) {
        query = query.with_attributes(attributes);
    }
    if let Some(publishers) = with_list(&args.publisher) {
        query = query.with_publishers(publishers);
    }
    if let Some(max) = args.max {
        query = query.with_max(max);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    if let Some(ref sort_by) = args.sort_by {
        query = query.with_sort_by(sort_by.parse::<SortBy>()?);
    }
    if let Some(ref format) = args.format {
        query = query.with_format(format.parse::<ResponseFormat>()?);
    }

    Ok(query)
}

pub async fn run(
    args: &ArticlesArgs,
    endpoint: Endpoint,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_query(args)?;

    let result = match endpoint {
        Endpoint::Search => client.search(&query).await?,
        Endpoint::Headlines => client.headlines(&query).await?,
    };

    if let ApiResult::Raw(bytes) = result {
        return write_raw(&bytes, args.out.as_deref());
    }

    let resp = result.into_response()?;
    eprintln!(
        "{} of {} total articles",
        resp.articles.len(),
        resp.total_articles
    );

    match format {
        OutputFormat::Table => print_articles_table(&resp.articles),
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Csv => print_articles_csv(&resp.articles)?,
        OutputFormat::Markdown => print_articles_markdown(&resp.articles),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_date_accepts_plain_date() {
        let value = parse_date("2024-03-01").unwrap();
        assert_eq!(value.render(), "2024-03-01");
    }

    #[test]
    fn parse_date_accepts_rfc3339() {
        let value = parse_date("2024-03-01T10:00:00Z").unwrap();
        assert_eq!(value.render(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn parse_date_accepts_naive_datetime() {
        let value = parse_date("2024-03-01T10:00:00").unwrap();
        assert_eq!(value.render(), "2024-03-01T10:00:00");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("last week").is_err());
    }

    #[test]
    fn build_query_maps_all_flags() {
        let args = ArticlesArgs {
            q: Some("bitcoin".to_string()),
            start_date: Some("2024-03-01".to_string()),
            content: Some(true),
            lang: vec!["en".to_string(), "fr".to_string()],
            publisher: vec!["reuters.com".to_string()],
            max: Some(10),
            sort_by: Some("relevance".to_string()),
            format: Some("csv".to_string()),
            ..Default::default()
        };
        let query = build_query(&args).unwrap().normalize("k");
        assert_eq!(
            query.encode(),
            "q=bitcoin&startDate=2024-03-01&content=true&lang=en%2Cfr&max=10&sortby=relevance&publisher=reuters.com&format=csv&apikey=k"
        );
    }

    #[test]
    fn build_query_omits_unset_flags() {
        let query = build_query(&ArticlesArgs::default()).unwrap().normalize("k");
        assert_eq!(query.encode(), "apikey=k");
    }

    #[test]
    fn build_query_rejects_unknown_sort() {
        let args = ArticlesArgs {
            sort_by: Some("newest".to_string()),
            ..Default::default()
        };
        let err = build_query(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sort field 'newest': use publishedAt or relevance"
        );
    }

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ArticlesArgs,
    }

    fn content_from(argv: &[&str]) -> Option<String> {
        let cli = TestCli::try_parse_from(argv).unwrap();
        let query = build_query(&cli.args).unwrap().normalize("k");
        query.get("content").map(str::to_string)
    }

    #[test]
    fn content_flag_forms() {
        assert_eq!(content_from(&["freenews"]), None);
        assert_eq!(content_from(&["freenews", "--content"]), Some("true".to_string()));
        assert_eq!(
            content_from(&["freenews", "--content", "false"]),
            Some("false".to_string())
        );
        assert_eq!(
            content_from(&["freenews", "--content=true", "--lang", "en"]),
            Some("true".to_string())
        );
    }

    #[test]
    fn build_query_rejects_unknown_format() {
        let args = ArticlesArgs {
            format: Some("pdf".to_string()),
            ..Default::default()
        };
        assert!(build_query(&args).is_err());
    }
}
