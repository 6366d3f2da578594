use std::fmt;

use metrics::counter;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::{form_urlencoded, Url};

#[derive(Debug, Error)]
pub enum CricketApiError {
    #[error("Cricket API error {0}")]
    Status(u16),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => write!(f, "{s}"),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Float(n) => write_float(f, *n),
        }
    }
}

/// Number-to-text the way the UI's query strings expect: `Infinity`, `NaN`,
/// no negative zero, exponent form outside `[1e-6, 1e21)`.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "NaN");
    }
    if n.is_infinite() {
        return write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" });
    }
    if n == 0.0 {
        return write!(f, "0");
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, e)) if !e.starts_with('-') => write!(f, "{mantissa}e+{e}"),
            _ => write!(f, "{exp}"),
        }
    } else {
        write!(f, "{n}")
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Str(v)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(v.into())
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        QueryValue::Float(v)
    }
}

/// Path and query of a RapidAPI request. `None` values are dropped from the
/// query string.
#[derive(Debug, Clone, Default)]
pub struct RapidRequest {
    pub path: String,
    pub query: Vec<(String, Option<QueryValue>)>,
}

impl RapidRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: Option<impl Into<QueryValue>>) -> Self {
        self.query.push((name.into(), value.map(Into::into)));
        self
    }
}

/// Client for the RapidAPI-hosted cricket endpoints.
///
/// Every request carries the `x-rapidapi-key` / `x-rapidapi-host` pair; an
/// unset credential is sent as an empty header value.
#[derive(Debug, Clone)]
pub struct RapidApiClient {
    http: Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl RapidApiClient {
    pub fn new(http: Client, api_key: Option<String>, host: Option<String>) -> Self {
        let api_key = api_key.unwrap_or_default();
        let host = host.unwrap_or_default();
        Self {
            http,
            base_url: format!("https://{host}"),
            api_key,
            host,
        }
    }

    /// Point the client at a different origin while keeping the configured
    /// host header. Used against local mock servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Build the absolute request URL. Never fails: a malformed host just
    /// produces a malformed URL.
    pub fn build_url(&self, req: &RapidRequest) -> String {
        build_url(&self.base_url, req)
    }

    /// GET `req` with the RapidAPI headers and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, req: &RapidRequest) -> Result<T, CricketApiError> {
        let url = self.build_url(req);
        tracing::debug!(url = %url, "Cricket API request");
        counter!("upstream_requests_total").increment(1);

        let resp = self
            .http
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            counter!("upstream_errors_total").increment(1);
            tracing::warn!(status = status.as_u16(), path = %req.path, "Cricket API returned error status");
            return Err(CricketApiError::Status(status.as_u16()));
        }

        let body: T = resp.json().await?;
        Ok(body)
    }
}

fn build_url(base_url: &str, req: &RapidRequest) -> String {
    let sep = if req.path.starts_with('/') { "" } else { "/" };
    let raw = format!("{base_url}{sep}{}", req.path);

    let params: Vec<(&str, String)> = req
        .query
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v.to_string())))
        .collect();

    // An unparseable base (e.g. no host configured) is passed through as-is.
    let Ok(mut url) = Url::parse(base_url) else {
        return append_raw_query(raw, &params);
    };

    let rest = format!("{sep}{}", req.path);
    let (rest, fragment) = match rest.split_once('#') {
        Some((r, frag)) => (r, Some(frag)),
        None => (rest.as_str(), None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (rest, None),
    };
    url.set_path(path);
    url.set_query(query);
    url.set_fragment(fragment);

    if !params.is_empty() {
        let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        for (name, value) in params {
            set_param(&mut pairs, name, value);
        }
        url.query_pairs_mut().clear().extend_pairs(&pairs);
    }

    url.to_string()
}

/// Same name twice keeps the first position with the last value and drops
/// any later duplicates.
fn set_param(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    match pairs.iter().position(|(k, _)| k == name) {
        Some(idx) => {
            pairs[idx].1 = value;
            let mut i = idx + 1;
            while i < pairs.len() {
                if pairs[i].0 == name {
                    pairs.remove(i);
                } else {
                    i += 1;
                }
            }
        }
        None => pairs.push((name.to_string(), value)),
    }
}

fn append_raw_query(mut raw: String, params: &[(&str, String)]) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (name, value) in params {
        set_param(&mut pairs, name, value.clone());
    }
    if !pairs.is_empty() {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&pairs)
            .finish();
        raw.push(if raw.contains('?') { '&' } else { '?' });
        raw.push_str(&query);
    }
    raw
}
