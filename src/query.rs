//! Query descriptors and their canonical relative-URL form.
//!
//! WIRE FORMAT
//! ===========
//! `/query/<model>/<fields>.<format>?<path>__<lookup>=<value>&...&limit=<n>`
//!
//! - `<fields>` is a comma-joined list of field paths, each optionally
//!   prefixed with `+` (ascending) or `-` (descending). An empty segment
//!   selects every field.
//! - Filters are emitted in descriptor order; the same key may repeat.
//! - A finite row limit is the trailing `limit` parameter. An unlimited
//!   query carries no `limit` parameter at all.
//!
//! Links generated by the backend encode spaces as `+` in the query string,
//! so the decoder accepts both `+` and `%20` there.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const QUERY_PREFIX: &str = "query/";
const LIMIT_PARAM: &str = "limit";
const LOOKUP_SEPARATOR: &str = "__";

/// Errors produced when a relative URL cannot be read back as a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryParseError {
    #[error("not a query url: {0}")]
    NotAQueryUrl(String),
    #[error("query url has no model")]
    MissingModel,
    #[error("query url has no output format: {0}")]
    MissingFormat(String),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("filter `{0}` has no lookup")]
    MissingLookup(String),
    #[error("invalid row limit: {0}")]
    InvalidLimit(String),
    #[error("row limit given more than once")]
    DuplicateLimit,
    #[error("invalid percent-encoding in `{0}`")]
    InvalidEncoding(String),
}

/// Output media the backend can render a query as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Csv,
    Json,
}

impl OutputFormat {
    pub const ALL: [Self; 3] = [Self::Html, Self::Csv, Self::Json];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| QueryParseError::UnknownFormat(s.to_owned()))
    }
}

/// Sort direction attached to a selected field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Dsc,
}

impl SortDirection {
    fn prefix(self) -> &'static str {
        match self {
            Self::Asc => "+",
            Self::Dsc => "-",
        }
    }
}

/// One selected column, optionally sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelection {
    pub path: String,
    #[serde(default)]
    pub sort: Option<SortDirection>,
}

impl FieldSelection {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), sort: None }
    }

    pub fn sorted(path: impl Into<String>, sort: SortDirection) -> Self {
        Self { path: path.into(), sort: Some(sort) }
    }
}

/// A single `path__lookup=value` restriction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "pathStr")]
    pub path: String,
    pub lookup: String,
    pub value: String,
}

impl Filter {
    pub fn new(path: impl Into<String>, lookup: impl Into<String>, value: impl Into<String>) -> Self {
        Self { path: path.into(), lookup: lookup.into(), value: value.into() }
    }

    /// Query-string key for this filter, e.g. `published__equal`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{LOOKUP_SEPARATOR}{}", self.path, self.lookup)
    }
}

/// Row cap for a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowLimit {
    Rows(NonZeroU32),
    #[default]
    Unlimited,
}

impl From<NonZeroU32> for RowLimit {
    fn from(rows: NonZeroU32) -> Self {
        Self::Rows(rows)
    }
}

/// Structured description of a data query.
///
/// `model` is the fully-qualified `app.Model` name. An empty `fields` list
/// means "all fields", not "no fields".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub model: String,
    pub fields: Vec<FieldSelection>,
    pub filters: Vec<Filter>,
    pub limit: RowLimit,
}

impl QueryDescriptor {
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldSelection>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: RowLimit) -> Self {
        self.limit = limit;
        self
    }
}

/// Encode `query` as a router-relative URL rendering it in `format`.
///
/// Pure and deterministic. The caller is responsible for `query.model`
/// naming a model that exists.
#[must_use]
pub fn rel_url_for_query(query: &QueryDescriptor, format: OutputFormat) -> String {
    let fields = query.fields.iter().map(encode_field).collect::<Vec<_>>().join(",");
    let mut url = format!("/{QUERY_PREFIX}{}/{fields}.{format}", urlencoding::encode(&query.model));

    let mut params = query
        .filters
        .iter()
        .map(|filter| format!("{}={}", urlencoding::encode(&filter.key()), urlencoding::encode(&filter.value)))
        .collect::<Vec<_>>();
    if let RowLimit::Rows(rows) = query.limit {
        params.push(format!("{LIMIT_PARAM}={rows}"));
    }

    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Read a URL produced by [`rel_url_for_query`] (or by the backend) back into
/// a query and its output format.
///
/// # Errors
///
/// Returns a [`QueryParseError`] when the path is not a query path or any
/// segment or parameter is malformed.
pub fn parse_rel_url(url: &str) -> Result<(QueryDescriptor, OutputFormat), QueryParseError> {
    let (path, query_string) = url.split_once('?').unwrap_or((url, ""));
    let rest = path
        .trim_start_matches('/')
        .strip_prefix(QUERY_PREFIX)
        .ok_or_else(|| QueryParseError::NotAQueryUrl(url.to_owned()))?;

    let (model, tail) = rest.split_once('/').ok_or_else(|| QueryParseError::MissingFormat(url.to_owned()))?;
    let model = decode_path_component(model)?;
    if model.is_empty() {
        return Err(QueryParseError::MissingModel);
    }

    let (fields, format) = tail.rsplit_once('.').ok_or_else(|| QueryParseError::MissingFormat(url.to_owned()))?;
    let format = format.parse::<OutputFormat>()?;
    let fields = parse_fields(fields)?;
    let (filters, limit) = parse_params(query_string)?;

    Ok((QueryDescriptor { model, fields, filters, limit }, format))
}

fn encode_field(field: &FieldSelection) -> String {
    let prefix = field.sort.map_or("", SortDirection::prefix);
    let encoded = urlencoding::encode(&field.path);
    // `-` survives percent-encoding and would read back as a sort prefix.
    match encoded.strip_prefix('-') {
        Some(rest) => format!("{prefix}%2D{rest}"),
        None => format!("{prefix}{encoded}"),
    }
}

fn parse_fields(segment: &str) -> Result<Vec<FieldSelection>, QueryParseError> {
    segment
        .split(',')
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            let (sort, name) = if let Some(name) = raw.strip_prefix('+') {
                (Some(SortDirection::Asc), name)
            } else if let Some(name) = raw.strip_prefix('-') {
                (Some(SortDirection::Dsc), name)
            } else {
                (None, raw)
            };
            Ok(FieldSelection { path: decode_path_component(name)?, sort })
        })
        .collect()
}

fn parse_params(query_string: &str) -> Result<(Vec<Filter>, RowLimit), QueryParseError> {
    let mut filters = Vec::new();
    let mut limit = None;

    for pair in query_string.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_query_component(raw_key)?;
        let value = decode_query_component(raw_value)?;

        if key == LIMIT_PARAM {
            if limit.is_some() {
                return Err(QueryParseError::DuplicateLimit);
            }
            let rows = value.parse::<NonZeroU32>().map_err(|_| QueryParseError::InvalidLimit(value.clone()))?;
            limit = Some(RowLimit::Rows(rows));
            continue;
        }

        match key.rsplit_once(LOOKUP_SEPARATOR) {
            Some((path, lookup)) if !path.is_empty() && !lookup.is_empty() => {
                filters.push(Filter::new(path, lookup, value));
            }
            _ => return Err(QueryParseError::MissingLookup(key)),
        }
    }

    Ok((filters, limit.unwrap_or_default()))
}

fn decode_path_component(raw: &str) -> Result<String, QueryParseError> {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .map_err(|_| QueryParseError::InvalidEncoding(raw.to_owned()))
}

fn decode_query_component(raw: &str) -> Result<String, QueryParseError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|_| QueryParseError::InvalidEncoding(raw.to_owned()))
}
