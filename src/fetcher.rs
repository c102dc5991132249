use std::time::Duration;

use anyhow::{Context as _, anyhow};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

/// Single-shot HTTP client. Failed requests are never retried.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("build reqwest client")?;
        Ok(Self { client })
    }

    pub async fn get_bytes(&self, url: Url) -> anyhow::Result<Bytes> {
        tracing::debug!(%url, "GET");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("GET {} failed with status {}", url, status));
        }
        resp.bytes().await.context("read response body")
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        let bytes = self.get_bytes(url.clone()).await?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse json from {}", url))
    }
}
