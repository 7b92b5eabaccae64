use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::sleep;

use super::{AttackContext, collect};
use crate::config::RunConfig;
use crate::metrics::ResultSet;

/// Back-to-back launches separated by a uniformly random gap in
/// `[0, 1000) ms / rate`: irregular arrivals averaging near `1/rate` with no
/// smoothing.
pub(super) async fn run(ctx: &AttackContext, config: &RunConfig) -> ResultSet {
    let (tx, rx) = mpsc::channel(config.requests.max(1));

    for _ in 0..config.requests {
        ctx.launch(&tx);
        let jitter_ms = rand::thread_rng().gen_range(0..1_000u64);
        sleep(Duration::from_millis(jitter_ms) / config.rate.max(1)).await;
    }
    drop(tx);

    collect(rx, config.requests).await
}
