use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Client;
use tokio::time::Instant;
use tracing::trace;

use crate::args::HttpMethod;
use crate::config::RunConfig;
use crate::metrics::Outcome;

/// Everything needed to issue one request; shared unchanged by every task
/// in a run.
#[derive(Debug)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub keep_alive: bool,
}

impl RequestSpec {
    #[must_use]
    pub fn from_config(config: &RunConfig) -> Arc<Self> {
        Arc::new(Self {
            method: config.method,
            url: config.url.clone(),
            headers: config.headers.clone(),
            body: config.body.clone(),
            keep_alive: config.keep_alive,
        })
    }
}

/// Issues one HTTP request and classifies the result.
///
/// Latency is wall-clock time from just before the call to response (or
/// error) receipt. The response body is drained and discarded before the
/// outcome is emitted so the connection can return to the pool. A build or
/// transport error becomes a failure outcome; nothing is retried here.
pub async fn execute(client: &Client, spec: &RequestSpec) -> Outcome {
    let start = Instant::now();

    let mut builder = client.request(spec.method.as_reqwest(), &spec.url);
    for (key, value) in &spec.headers {
        builder = builder.header(key, value);
    }
    if spec.keep_alive {
        builder = builder.header("Connection", "keep-alive");
    }
    if !spec.body.is_empty() {
        builder = builder.body(spec.body.clone());
    }

    let request = match builder.build() {
        Ok(request) => request,
        Err(err) => {
            return Outcome::failure(format!("Failed to build request: {}", err));
        }
    };

    match client.execute(request).await {
        Ok(response) => {
            let latency = start.elapsed();
            let status = response.status();
            drop(response.bytes().await);
            trace!(status = status.as_u16(), ?latency, "request completed");
            Outcome::Success { status, latency }
        }
        Err(err) => Outcome::failure(err.to_string()),
    }
}
