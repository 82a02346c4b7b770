use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use freenews_api::types::Article;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ArticleRow {
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

const TITLE_WIDTH: usize = 80;

fn build_article_rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|a| ArticleRow {
            published: a
                .published_at
                .as_deref()
                .map(format_published)
                .unwrap_or_default(),
            source: a.source.name.clone(),
            title: truncate(&a.title, TITLE_WIDTH),
            url: a.url.clone(),
        })
        .collect()
}

/// Shortens RFC 3339 timestamps to `YYYY-MM-DD HH:MM`; anything else is shown as sent.
fn format_published(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

pub fn print_articles_table(articles: &[Article]) {
    println!("{}", Table::new(build_article_rows(articles)));
}

pub fn print_articles_markdown(articles: &[Article]) {
    let mut table = Table::new(build_article_rows(articles));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_articles_csv(articles: &[Article]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_article_rows(articles) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Writes a raw csv/xlsx payload to `out`, or to stdout when no file is given.
pub fn write_raw(bytes: &[u8], out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
