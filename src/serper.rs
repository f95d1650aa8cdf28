// src/serper.rs
use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::ProxyConfig;
use crate::error::ProxyError;

/// One upstream search call. The response body is passed back untouched.
#[async_trait::async_trait]
pub trait Searcher: Send + Sync {
    async fn search(&self, query: &str, num: u64) -> Result<Value, ProxyError>;
}

pub struct Serper {
    http: Client,
    key: String,
    base: Url,
}

impl Serper {
    pub fn new(key: String, upstream_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        let base = Url::parse(upstream_url)?;
        Ok(Self { http, key, base })
    }

    /// `None` when no credential is configured.
    pub fn from_config(cfg: &ProxyConfig) -> anyhow::Result<Option<Self>> {
        cfg.credential()
            .map(|key| Self::new(key.to_string(), &cfg.upstream_url, cfg.timeout()))
            .transpose()
    }

    fn request_url(&self, query: &str, num: u64) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("engine", "google")
            .append_pair("q", query)
            .append_pair("num", &num.to_string());
        url
    }
}

#[async_trait::async_trait]
impl Searcher for Serper {
    async fn search(&self, query: &str, num: u64) -> Result<Value, ProxyError> {
        let url = self.request_url(query, num);
        tracing::debug!(host = ?url.host_str(), num, "forwarding search");
        let resp = self.http.get(url).bearer_auth(&self.key).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(ProxyError::Upstream { status, body });
        }
        Ok(resp.json::<Value>().await?)
    }
}
