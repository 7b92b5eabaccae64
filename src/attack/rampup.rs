use tokio::sync::mpsc;
use tokio::time::sleep;

use super::{AttackContext, collect, pace_interval};
use crate::config::RunConfig;
use crate::metrics::ResultSet;

/// Back-to-back launches that pause for the base pacing gap after every
/// `step_size`-th launch (1-based), producing step-wise throughput.
pub(super) async fn run(ctx: &AttackContext, config: &RunConfig) -> ResultSet {
    let (tx, rx) = mpsc::channel(config.requests.max(1));
    let gap = pace_interval(config.rate);
    let step = config.step_size.max(1);

    for launched in 1..=config.requests {
        ctx.launch(&tx);
        if launched % step == 0 {
            sleep(gap).await;
        }
    }
    drop(tx);

    collect(rx, config.requests).await
}
