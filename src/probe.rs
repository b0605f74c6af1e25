//! Per-endpoint HTTP probe

use std::time::Duration;

use anyhow::Context;

use crate::reporter::Reporter;

/// Default request timeout in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Status recorded when the request never produced a response
pub const FAILURE_SENTINEL: u16 = 400;

/// Outcome of probing one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub status: u16,
}

impl ProbeResult {
    /// Only a plain 200 counts; redirects and other 2xx do not.
    pub fn is_passing(&self) -> bool {
        self.status == 200
    }
}

/// Transport used to fetch one URL and return its status code.
pub trait Probe {
    async fn status(&self, url: &str) -> anyhow::Result<u16>;
}

/// GET probe backed by one shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    /// Build the client once; the timeout bounds the whole request.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, timeout })
    }

    #[cfg(test)]
    fn direct(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .unwrap();
        Self { client, timeout }
    }
}

impl Probe for HttpProbe {
    async fn status(&self, url: &str) -> anyhow::Result<u16> {
        tracing::debug!("GET {} (timeout {:?})", url, self.timeout);
        // body is dropped unread
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        tracing::debug!("GET {} -> {}", url, status);
        Ok(status)
    }
}

/// Probe one endpoint. Transport errors are reported right away, since the
/// summary only keeps the sentinel status.
pub async fn probe_endpoint<P, R>(probe: &P, reporter: &R, url: &str) -> ProbeResult
where
    P: Probe + ?Sized,
    R: Reporter + ?Sized,
{
    let status = match probe.status(url).await {
        Ok(status) => status,
        Err(e) => {
            tracing::debug!("GET {} failed: {:#}", url, e);
            reporter.error(format_args!("Error getting URL {}\n{:#}", url, e));
            FAILURE_SENTINEL
        }
    };
    ProbeResult {
        url: url.to_string(),
        status,
    }
}

/// Probe every endpoint once, in order, one at a time.
pub async fn run_all<P, R>(probe: &P, reporter: &R, endpoints: &[&str]) -> Vec<ProbeResult>
where
    P: Probe + ?Sized,
    R: Reporter + ?Sized,
{
    let mut results = Vec::with_capacity(endpoints.len());
    for url in endpoints {
        results.push(probe_endpoint(probe, reporter, url).await);
    }
    results
}
