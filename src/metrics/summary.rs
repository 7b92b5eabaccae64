use std::time::Duration;

use super::types::{Outcome, ResultSet};

/// Aggregate metrics for one sealed result set. Always recomputed fresh,
/// never maintained incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
    /// Percent of requests that received a response.
    pub success_rate: f64,
    /// Percent of requests that failed to build or transport.
    pub error_rate: f64,
    /// Mean latency over successful outcomes only; `None` when there were no
    /// successes.
    pub avg_latency: Option<Duration>,
}

impl MetricsSummary {
    #[must_use]
    pub fn from_results(results: &ResultSet) -> Self {
        let mut successes = 0usize;
        let mut failures = 0usize;
        let mut latency_sum = Duration::ZERO;

        for outcome in results {
            match outcome {
                Outcome::Success { latency, .. } => {
                    successes += 1;
                    latency_sum += *latency;
                }
                Outcome::Failure { .. } => failures += 1,
            }
        }

        let total = results.len();
        let (success_rate, error_rate) = if total == 0 {
            (0.0, 0.0)
        } else {
            let total_f = total as f64;
            (
                successes as f64 / total_f * 100.0,
                failures as f64 / total_f * 100.0,
            )
        };
        let avg_latency = (successes > 0)
            .then(|| latency_sum / u32::try_from(successes).unwrap_or(u32::MAX));

        Self {
            total,
            successes,
            failures,
            success_rate,
            error_rate,
            avg_latency,
        }
    }
}

/// Human-readable report lines; the controller decides where they go.
#[must_use]
pub fn summary_lines(summary: &MetricsSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    lines.push(format!("Total Requests: {}", summary.total));
    lines.push(format!(
        "Successful Requests: {} | Success Rate: {:.2}%",
        summary.successes, summary.success_rate
    ));
    lines.push(format!(
        "Failed Requests:     {} | Error Rate:   {:.2}%",
        summary.failures, summary.error_rate
    ));
    match summary.avg_latency {
        Some(avg) => lines.push(format!("Average Response Time: {:.2?}", avg)),
        None => lines.push("Average Response Time: n/a (no successful requests)".to_owned()),
    }
    lines
}
