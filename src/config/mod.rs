mod payload;


pub use payload::{RequestPayload, load_payload};

use std::collections::BTreeMap;
use std::time::Duration;

use crate::args::{AttackArgs, HttpMethod};
use crate::error::{AppError, AppResult};

/// Immutable description of one load-test run.
///
/// `requests` bounds every attack except `sustained`, which is bounded by
/// `duration` instead.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub method: HttpMethod,
    pub requests: usize,
    pub rate: u32,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub keep_alive: bool,
    pub burst_count: usize,
    pub step_size: usize,
    pub spike_height: usize,
    pub duration: Duration,
}

impl RunConfig {
    /// Resolves CLI arguments and the optional payload file into a run config.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload file cannot be read or parsed; no
    /// request is issued in that case.
    pub fn from_args(args: &AttackArgs) -> AppResult<Self> {
        let payload = match args.body_file.as_deref() {
            Some(path) => load_payload(path)?,
            None => RequestPayload::default(),
        };

        let body = if payload.body.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&payload.body)
                .map_err(|err| AppError::Message(format!("Failed to encode body content: {}", err)))?
        };

        Ok(Self {
            url: args.url.clone(),
            method: args.method,
            requests: args.requests,
            rate: args.rate,
            headers: payload.headers,
            body,
            keep_alive: args.keep_alive,
            burst_count: args.burst_count,
            step_size: args.step_size,
            spike_height: args.spike_height,
            duration: args.duration,
        })
    }
}
