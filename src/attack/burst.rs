use tokio::sync::mpsc;
use tokio::time::sleep;

use super::{AttackContext, collect, pace_interval};
use crate::config::RunConfig;
use crate::metrics::ResultSet;

/// `burst_count` waves of `requests` simultaneous launches.
///
/// Successive wave starts are separated by the base pacing gap only; there
/// is no per-wave join, so wave N+1 may start while wave N is still in
/// flight.
pub(super) async fn run(ctx: &AttackContext, config: &RunConfig) -> ResultSet {
    let total = config.requests.saturating_mul(config.burst_count);
    let (tx, rx) = mpsc::channel(total.max(1));
    let gap = pace_interval(config.rate);

    for wave in 0..config.burst_count {
        if wave > 0 {
            sleep(gap).await;
        }
        for _ in 0..config.requests {
            ctx.launch(&tx);
        }
    }
    drop(tx);

    collect(rx, total).await
}
