use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_u32, parse_positive_usize};
use super::types::{AttackKind, HttpMethod};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Async HTTP load-generation CLI with six pacing strategies, aggregate metrics, and latency time-series charts."
)]
pub struct AttackArgs {
    /// Target URL for the load test
    #[arg(long, short, default_value = "http://localhost:8080")]
    pub url: String,

    /// Pacing strategy for the run
    #[arg(long, short, default_value = "steady", ignore_case = true)]
    pub attack: AttackKind,

    /// HTTP method to use
    #[arg(long, short = 'X', default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// Number of requests to send (ignored by the sustained attack)
    #[arg(long, short = 'r', default_value_t = 100, value_parser = parse_positive_usize)]
    pub requests: usize,

    /// Target request rate in requests per second
    #[arg(long, default_value_t = 20, value_parser = parse_positive_u32)]
    pub rate: u32,

    /// Number of waves for the burst attack
    #[arg(long = "burst", default_value_t = 5, value_parser = parse_positive_usize)]
    pub burst_count: usize,

    /// Launches between pauses for the ramp-up attack
    #[arg(long = "step-size", default_value_t = 10, value_parser = parse_positive_usize)]
    pub step_size: usize,

    /// Launches between lulls for the spike attack
    #[arg(long = "spike-height", default_value_t = 10, value_parser = parse_positive_usize)]
    pub spike_height: usize,

    /// Wall-clock budget for the sustained attack (supports ms/s/m/h)
    #[arg(long, default_value = "10s", value_parser = parse_duration_arg)]
    pub duration: Duration,

    /// JSON file with request headers and body: {"headers": {..}, "body": {..}}
    #[arg(long = "body-file", short = 'b')]
    pub body_file: Option<String>,

    /// Reuse TCP connections across requests (tunes the idle connection pool)
    #[arg(long = "keep-alive", short = 'k')]
    pub keep_alive: bool,

    /// Skip rendering the latency time-series chart
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Directory for chart output
    #[arg(long = "results-path", default_value = "./results")]
    pub results_path: String,

    /// Number of tokio worker threads (defaults to the core count)
    #[arg(long, value_parser = parse_positive_usize)]
    pub workers: Option<usize>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
