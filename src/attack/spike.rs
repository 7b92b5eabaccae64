use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::sleep;

use super::{AttackContext, collect, pace_interval};
use crate::config::RunConfig;
use crate::metrics::ResultSet;

/// Lulls are drawn uniformly from 0..20 whole seconds.
const MAX_LULL_SECS: u64 = 20;

/// Steady-style pacing, except that every `spike_height`-th launch (0-based
/// index) is followed by a random multi-second lull instead of the base gap,
/// simulating abrupt traffic spikes separated by quiet periods.
pub(super) async fn run(ctx: &AttackContext, config: &RunConfig) -> ResultSet {
    let (tx, rx) = mpsc::channel(config.requests.max(1));
    let gap = pace_interval(config.rate);

    for index in 0..config.requests {
        ctx.launch(&tx);
        if is_lull_index(index, config.spike_height) {
            let lull_secs = rand::thread_rng().gen_range(0..MAX_LULL_SECS);
            sleep(Duration::from_secs(lull_secs)).await;
        } else {
            sleep(gap).await;
        }
    }
    drop(tx);

    collect(rx, config.requests).await
}

/// True when the launch at `index` is followed by a lull instead of the
/// base pacing gap.
pub(crate) fn is_lull_index(index: usize, spike_height: usize) -> bool {
    index % spike_height.max(1) == 0
}
