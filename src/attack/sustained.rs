use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

use super::{AttackContext, collect, pace_interval};
use crate::config::RunConfig;
use crate::metrics::ResultSet;

/// Launches at the base pacing gap for as long as wall-clock time remains
/// before `start + duration`. The request count is not known in advance;
/// whatever is still in flight when the deadline passes is joined before
/// the results are sealed.
pub(super) async fn run(ctx: &AttackContext, config: &RunConfig) -> ResultSet {
    let gap = pace_interval(config.rate);
    let (tx, rx) = mpsc::channel(estimate_capacity(config.duration, gap));
    let deadline = Instant::now() + config.duration;
    let mut launched = 0usize;

    while Instant::now() < deadline {
        ctx.launch(&tx);
        launched += 1;
        sleep(gap).await;
    }
    drop(tx);
    tracing::debug!(launched, "sustained deadline reached, draining in-flight requests");

    collect(rx, launched).await
}

/// Conduit capacity for a deadline-bound run: one slot per pacing interval
/// that fits in the duration, plus slack for the boundary launch.
fn estimate_capacity(duration: Duration, gap: Duration) -> usize {
    let intervals = duration
        .as_millis()
        .checked_div(gap.as_millis().max(1))
        .unwrap_or(0);
    usize::try_from(intervals).unwrap_or(usize::MAX).saturating_add(2)
}
