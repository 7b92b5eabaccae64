use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use clap::Parser;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::{error, info};

use crate::args::AttackArgs;
use crate::attack;
use crate::charts;
use crate::config::RunConfig;
use crate::error::AppResult;
use crate::metrics::{self, MetricsSummary};
use crate::progress;

/// CLI entry point: parse arguments, resolve the run configuration,
/// dispatch the attack, and report.
///
/// # Errors
///
/// Returns an error for configuration failures (unreadable or malformed
/// payload file, runtime construction); in that case no request is issued.
/// Per-request failures are reflected in the metrics, never here.
pub fn run() -> AppResult<()> {
    let args = AttackArgs::parse();
    crate::logger::init_logging(args.verbose);

    let config = RunConfig::from_args(&args)?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = args.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.enable_all().build()?;

    runtime.block_on(run_async(&args, &config))
}

async fn run_async(args: &AttackArgs, config: &RunConfig) -> AppResult<()> {
    if !config.headers.is_empty() || !config.body.is_empty() {
        info!(headers = ?config.headers, body = %config.body, "request payload loaded");
    }

    let completed = Arc::new(AtomicUsize::new(0));
    let (shutdown_tx, _shutdown_rx) = broadcast::channel(1);
    let goal = attack::expected_total(args.attack, config);
    let progress_handle =
        progress::setup_progress_indicator(goal, Arc::clone(&completed), &shutdown_tx);

    let run_start = Instant::now();
    let results = attack::run_attack(args.attack, config, completed).await?;
    let run_elapsed = run_start.elapsed();

    drop(shutdown_tx.send(()));
    drop(progress_handle.await);

    let summary = MetricsSummary::from_results(&results);
    for line in metrics::summary_lines(&summary) {
        println!("{}", line);
    }
    println!("Test completed in {:.2?}", run_elapsed);

    if !args.no_plot {
        match charts::plot_latency_timeseries(&results, &args.results_path) {
            Ok(Some(path)) => println!("Results plotted to {}", path.display()),
            Ok(None) => {}
            // Chart failures are non-fatal; the summary already went out.
            Err(err) => error!("Failed to render chart: {}", err),
        }
    }
    Ok(())
}
