use tokio::sync::mpsc;
use tokio::time::interval;

use super::{AttackContext, collect, pace_interval};
use crate::config::RunConfig;
use crate::metrics::ResultSet;

/// One launch per `1/rate` tick. The timer gates initiation only; requests
/// in flight are never waited on until the final join.
pub(super) async fn run(ctx: &AttackContext, config: &RunConfig) -> ResultSet {
    let (tx, rx) = mpsc::channel(config.requests.max(1));
    let mut ticker = interval(pace_interval(config.rate));

    for _ in 0..config.requests {
        ticker.tick().await;
        ctx.launch(&tx);
    }
    drop(tx);

    collect(rx, config.requests).await
}
