//! The load dispatch engine: six pacing strategies sharing one contract.
//!
//! Every strategy launches one tokio task per request according to its
//! timing rule and returns once each launched task has reported exactly one
//! outcome. The bounded outcome channel is the only synchronization between
//! tasks and the run: each task writes once, and the channel closing after
//! the last sender drops is the join barrier.

mod burst;
mod random;
mod rampup;
mod spike;
mod steady;
mod sustained;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc;
use tracing::debug;

use crate::args::AttackKind;
use crate::config::RunConfig;
use crate::error::AppResult;
use crate::http::{self, RequestSpec};
use crate::metrics::{Outcome, ResultSet};

/// Shared state handed to a pacing strategy: the pooled client, the request
/// template, and the completion counter driving the progress indicator.
pub struct AttackContext {
    client: Client,
    spec: Arc<RequestSpec>,
    completed: Arc<AtomicUsize>,
}

impl AttackContext {
    /// Spawns one request task. The task runs to completion without
    /// coordinating with siblings and reports exactly once through `tx`.
    fn launch(&self, tx: &mpsc::Sender<Outcome>) {
        let client = self.client.clone();
        let spec = Arc::clone(&self.spec);
        let completed = Arc::clone(&self.completed);
        let tx = tx.clone();
        drop(tokio::spawn(async move {
            let outcome = http::execute(&client, &spec).await;
            completed.fetch_add(1, Ordering::Relaxed);
            drop(tx.send(outcome).await);
        }));
    }
}

/// Runs the selected pacing strategy to completion and seals the results.
///
/// Per-request failures never abort the run; the only fatal error here is a
/// client that cannot be constructed, which happens before any launch.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built.
pub async fn run_attack(
    kind: AttackKind,
    config: &RunConfig,
    completed: Arc<AtomicUsize>,
) -> AppResult<ResultSet> {
    let ctx = AttackContext {
        client: http::build_client(config.keep_alive)?,
        spec: RequestSpec::from_config(config),
        completed,
    };
    debug!(attack = %kind, rate = config.rate, "dispatching attack");

    let results = match kind {
        AttackKind::Steady => steady::run(&ctx, config).await,
        AttackKind::Random => random::run(&ctx, config).await,
        AttackKind::Burst => burst::run(&ctx, config).await,
        AttackKind::Rampup => rampup::run(&ctx, config).await,
        AttackKind::Spike => spike::run(&ctx, config).await,
        AttackKind::Sustained => sustained::run(&ctx, config).await,
    };
    Ok(results)
}

/// How many outcomes the run will produce, when that is knowable up front.
/// Sustained runs are deadline-bound, so their total is `None`.
#[must_use]
pub fn expected_total(kind: AttackKind, config: &RunConfig) -> Option<usize> {
    match kind {
        AttackKind::Steady | AttackKind::Random | AttackKind::Rampup | AttackKind::Spike => {
            Some(config.requests)
        }
        AttackKind::Burst => Some(config.requests.saturating_mul(config.burst_count)),
        AttackKind::Sustained => None,
    }
}

/// Base pacing gap derived from the target rate. Never zero, so it is
/// always a valid timer period.
pub(crate) fn pace_interval(rate: u32) -> Duration {
    let gap = Duration::from_secs(1) / rate.max(1);
    gap.max(Duration::from_nanos(1))
}

/// Drains the conduit until every producer has dropped. This is the full
/// join: exactly one write per dispatched task, exactly one drain here.
pub(crate) async fn collect(mut rx: mpsc::Receiver<Outcome>, expected: usize) -> ResultSet {
    let mut results = ResultSet::with_capacity(expected);
    while let Some(outcome) = rx.recv().await {
        results.push(outcome);
    }
    results
}
