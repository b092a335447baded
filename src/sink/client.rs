use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use url::Url;

use crate::{config::SinkConfig, domain::PostKind};

use super::payload::build_payload;

/// Best-effort mirror of submitted content to a hosted store. Writes are
/// not retried and cannot be cancelled once started.
#[derive(Clone)]
pub struct RemoteSink {
    http: Client,
    endpoint: Url,
    timeout: Duration,
}

impl RemoteSink {
    /// Returns `None` when no endpoint is configured.
    pub fn from_config(http: Client, config: &SinkConfig) -> Option<Self> {
        config.endpoint.clone().map(|endpoint| Self {
            http,
            endpoint,
            timeout: config.timeout,
        })
    }

    pub async fn publish(&self, content: &str, kind: PostKind) -> Result<()> {
        let payload = build_payload(content, kind, Utc::now());
        self.http
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .context("sink request failed")?
            .error_for_status()
            .context("sink rejected the post")?;

        tracing::debug!(target: "sink", kind = ?kind, "post mirrored to remote store");
        Ok(())
    }
}
