use crate::domain::constants::SEARCH_ROWS;
use crate::domain::models::{DependencyCoordinate, Lookup};
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Anything able to turn a coordinate into a publish-time lookup.
pub trait TimestampSource: Sync {
    fn lookup(&self, coordinate: &DependencyCoordinate) -> Lookup;
}

pub struct RegistryClient {
    base: String,
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new(base: &str, timeout_secs: Option<u64>) -> anyhow::Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn resolve(&self, group: &str, artifact: &str, version: &str) -> Lookup {
        let url = match search_url(&self.base, group, artifact) {
            Ok(u) => u,
            Err(e) => {
                debug!("invalid registry url: {}", e);
                return Lookup::Failed;
            }
        };
        debug!("GET -> {}", url);
        match self.fetch(url) {
            Ok(body) => parse_search_response(&body, version),
            Err(e) => {
                debug!("registry request failed: {}", e);
                Lookup::Failed
            }
        }
    }

    fn fetch(&self, url: Url) -> anyhow::Result<String> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        if resp.status() != reqwest::StatusCode::OK {
            anyhow::bail!("unexpected status {}", resp.status());
        }
        Ok(resp.text()?)
    }
}

impl TimestampSource for RegistryClient {
    fn lookup(&self, coordinate: &DependencyCoordinate) -> Lookup {
        self.resolve(&coordinate.group, &coordinate.artifact, &coordinate.version)
    }
}

/// `<base>/solrsearch/select?q=g:"<group>" AND a:"<artifact>"&core=gav&rows=1000&wt=json`,
/// form-encoded.
pub fn search_url(base: &str, group: &str, artifact: &str) -> anyhow::Result<Url> {
    let endpoint = format!("{}/solrsearch/select", base.trim_end_matches('/'));
    let query = format!("g:\"{}\" AND a:\"{}\"", group, artifact);
    Ok(Url::parse_with_params(
        &endpoint,
        &[
            ("q", query.as_str()),
            ("core", "gav"),
            ("rows", SEARCH_ROWS),
            ("wt", "json"),
        ],
    )?)
}

/// Picks the first document whose `v` equals `version` and reads its `timestamp`.
pub fn parse_search_response(body: &str, version: &str) -> Lookup {
    let root: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            debug!("registry body is not json: {}", e);
            return Lookup::Failed;
        }
    };
    let Some(docs) = root.pointer("/response/docs").and_then(Value::as_array) else {
        debug!("registry body has no response.docs array");
        return Lookup::Failed;
    };
    let Some(doc) = docs
        .iter()
        .find(|d| d.get("v").and_then(Value::as_str) == Some(version))
    else {
        return Lookup::NotFound;
    };
    let raw = doc.get("timestamp");
    debug!("timestamp(RAW) -> {:?}", raw);
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(ts) => {
            debug!("timestamp(Parsed) -> {}", ts);
            Lookup::Published(ts)
        }
        None => Lookup::Failed,
    }
}
