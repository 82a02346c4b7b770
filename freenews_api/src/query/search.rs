//! Typed parameter set shared by the search and headlines endpoints.

use super::{NormalizedQuery, ParamValue, ResponseFormat, SortBy};

/// Query parameters for `/v1/search` and `/v1/headlines`.
///
/// Every recognized parameter is optional; unset ones are not sent. List
/// parameters accumulate through the singular `with_*` methods and are
/// comma-joined on the wire. Parameters the builder does not know about can
/// be passed through [`SearchQuery::with_param`].
///
/// Keys behave like a map: each name is sent at most once and the last
/// write wins, whether it came from a typed setter or `with_param`.
#[derive(Clone, Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub start_date: Option<ParamValue>,
    pub end_date: Option<ParamValue>,
    pub content: Option<bool>,
    pub lang: Option<Vec<String>>,
    pub country: Option<Vec<String>>,
    pub region: Option<Vec<String>>,
    pub category: Option<Vec<String>>,
    pub max: Option<i64>,
    pub attributes: Option<Vec<String>>,
    pub page: Option<i64>,
    pub sort_by: Option<SortBy>,
    pub publisher: Option<Vec<String>>,
    pub format: Option<ResponseFormat>,
    /// Untyped entries, one per key. An entry whose key names a recognized
    /// parameter replaces that parameter's value.
    pub extra: Vec<(String, Option<ParamValue>)>,
}

fn push(list: &mut Option<Vec<String>>, value: &str) {
    list.get_or_insert_with(Vec::new).push(value.to_string());
}

fn extend(list: &mut Option<Vec<String>>, values: &[String]) {
    list.get_or_insert_with(Vec::new).extend_from_slice(values);
}

fn list(values: &Option<Vec<String>>) -> Option<ParamValue> {
    values.clone().map(ParamValue::List)
}

impl SearchQuery {
    /// Every parameter entry in wire order, including unset ones as `None`.
    /// Each key appears exactly once.
    pub fn entries(&self) -> Vec<(String, Option<ParamValue>)> {
        let mut entries: Vec<(String, Option<ParamValue>)> = vec![
            ("q".into(), self.q.clone().map(ParamValue::Text)),
            ("startDate".into(), self.start_date.clone()),
            ("endDate".into(), self.end_date.clone()),
            ("content".into(), self.content.map(ParamValue::Bool)),
            ("lang".into(), list(&self.lang)),
            ("country".into(), list(&self.country)),
            ("region".into(), list(&self.region)),
            ("category".into(), list(&self.category)),
            ("max".into(), self.max.map(ParamValue::Integer)),
            ("attributes".into(), list(&self.attributes)),
            ("page".into(), self.page.map(ParamValue::Integer)),
            (
                "sortby".into(),
                self.sort_by.map(|s| ParamValue::Text(s.to_string())),
            ),
            ("publisher".into(), list(&self.publisher)),
            (
                "format".into(),
                self.format.map(|f| ParamValue::Text(f.to_string())),
            ),
        ];
        for (key, value) in &self.extra {
            match entries.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value.clone(),
                None => entries.push((key.clone(), value.clone())),
            }
        }
        entries
    }

    /// Builds the wire query with `api_key` injected last. The query itself
    /// is left untouched and may be reused.
    pub fn normalize(&self, api_key: &str) -> NormalizedQuery {
        NormalizedQuery::new(self.entries(), api_key)
    }

    /// Whether a successful response should be parsed as JSON. Reads the
    /// same `format` entry that is sent on the wire; no format means JSON.
    pub fn expects_json(&self) -> bool {
        match self.entries().into_iter().find(|(k, _)| k == "format") {
            Some((_, Some(value))) => value.render() == "json",
            _ => true,
        }
    }

    /// Drops any untyped entry for `key` so a typed setter called later wins.
    fn forget(&mut self, key: &str) {
        self.extra.retain(|(k, _)| k != key);
    }

    pub fn with_q(mut self, q: &str) -> Self {
        self.forget("q");
        self.q = Some(q.to_string());
        self
    }

    /// Lower bound on publication time: a `NaiveDate`, a date-time, or a
    /// preformatted string.
    pub fn with_start_date(mut self, start_date: impl Into<ParamValue>) -> Self {
        self.forget("startDate");
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<ParamValue>) -> Self {
        self.forget("endDate");
        self.end_date = Some(end_date.into());
        self
    }

    /// Requests the full article body.
    pub fn with_content(mut self, content: bool) -> Self {
        self.forget("content");
        self.content = Some(content);
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.forget("lang");
        push(&mut self.lang, lang);
        self
    }
    pub fn with_langs(mut self, langs: &[String]) -> Self {
        self.forget("lang");
        extend(&mut self.lang, langs);
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.forget("country");
        push(&mut self.country, country);
        self
    }
    pub fn with_countries(mut self, countries: &[String]) -> Self {
        self.forget("country");
        extend(&mut self.country, countries);
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.forget("region");
        push(&mut self.region, region);
        self
    }
    pub fn with_regions(mut self, regions: &[String]) -> Self {
        self.forget("region");
        extend(&mut self.region, regions);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.forget("category");
        push(&mut self.category, category);
        self
    }
    pub fn with_categories(mut self, categories: &[String]) -> Self {
        self.forget("category");
        extend(&mut self.category, categories);
        self
    }

    /// Caps the number of returned articles.
    pub fn with_max(mut self, max: i64) -> Self {
        self.forget("max");
        self.max = Some(max);
        self
    }

    /// Restricts keyword matching to the given fields (title, description, content).
    pub fn with_attribute(mut self, attribute: &str) -> Self {
        self.forget("attributes");
        push(&mut self.attributes, attribute);
        self
    }
    pub fn with_attributes(mut self, attributes: &[String]) -> Self {
        self.forget("attributes");
        extend(&mut self.attributes, attributes);
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.forget("page");
        self.page = Some(page);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.forget("sortby");
        self.sort_by = Some(sort_by);
        self
    }

    pub fn with_publisher(mut self, publisher: &str) -> Self {
        self.forget("publisher");
        push(&mut self.publisher, publisher);
        self
    }
    pub fn with_publishers(mut self, publishers: &[String]) -> Self {
        self.forget("publisher");
        extend(&mut self.publisher, publishers);
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.forget("format");
        self.format = Some(format);
        self
    }

    /// Sets an arbitrary parameter. Setting a key again replaces its value in
    /// place; a recognized key (`q`, `format`, ...) overrides the typed
    /// field. `None` values are dropped during normalization and an `apikey`
    /// entry is always replaced by the configured key.
    pub fn with_param<V: Into<ParamValue>>(mut self, key: &str, value: Option<V>) -> Self {
        let value = value.map(Into::into);
        match self.extra.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.extra.push((key.to_string(), value)),
        }
        self
    }
}
