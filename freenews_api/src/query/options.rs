use std::str::FromStr;

/// A string that does not name a known option value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {option} '{value}': use {expected}")]
pub struct UnknownOption {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Result ordering accepted by the `sortby` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    PublishedAt,
    Relevance,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortBy::PublishedAt => "publishedAt",
                SortBy::Relevance => "relevance",
            }
        )?;
        Ok(())
    }
}

impl FromStr for SortBy {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publishedAt" | "published-at" | "published_at" => Ok(SortBy::PublishedAt),
            "relevance" => Ok(SortBy::Relevance),
            _ => Err(UnknownOption {
                option: "sort field",
                value: s.to_string(),
                expected: "publishedAt or relevance",
            }),
        }
    }
}

/// Response body format accepted by the `format` parameter. Anything other
/// than [`ResponseFormat::Json`] is returned to the caller as raw bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Json,
    Csv,
    Xlsx,
}

impl ResponseFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, ResponseFormat::Json)
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResponseFormat::Json => "json",
                ResponseFormat::Csv => "csv",
                ResponseFormat::Xlsx => "xlsx",
            }
        )?;
        Ok(())
    }
}

impl FromStr for ResponseFormat {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResponseFormat::Json),
            "csv" => Ok(ResponseFormat::Csv),
            "xlsx" => Ok(ResponseFormat::Xlsx),
            _ => Err(UnknownOption {
                option: "format",
                value: s.to_string(),
                expected: "json, csv or xlsx",
            }),
        }
    }
}
