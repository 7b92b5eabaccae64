
use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::prelude::*;

use crate::metrics::ResultSet;

const CHART_WIDTH: u32 = 1600;
const CHART_HEIGHT: u32 = 600;
const POINT_RADIUS: u32 = 3;

/// Renders the per-run latency time-series to a timestamped PNG under
/// `results_path`, creating the directory if needed.
///
/// One point per outcome in arrival order; point color tracks the status
/// class, with failures (status sentinel 0) drawn gray. Returns the path of
/// the written file, or `None` when there was nothing to plot.
///
/// # Errors
///
/// Returns an error when the output directory or the chart itself cannot be
/// written.
pub fn plot_latency_timeseries(
    results: &ResultSet,
    results_path: &str,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    if results.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(results_path)?;
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = Path::new(results_path).join(format!("results-{}.png", timestamp));

    let points: Vec<(u64, u64, u16)> = results
        .iter()
        .enumerate()
        .map(|(index, outcome)| {
            let seq = u64::try_from(index).unwrap_or(u64::MAX).saturating_add(1);
            (seq, outcome.latency_ms(), outcome.status_code())
        })
        .collect();

    let x_max = u64::try_from(points.len()).unwrap_or(u64::MAX).saturating_add(1);
    let y_max = points
        .iter()
        .map(|&(_, latency, _)| latency)
        .max()
        .unwrap_or(1)
        .max(1)
        .saturating_add(1);

    let root = BitMapBackend::new(&path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Response Time", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..x_max, 0u64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Request (arrival order)")
        .y_desc("Response Time (ms)")
        .x_labels(20)
        .y_labels(10)
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|&(seq, latency, _)| (seq, latency)),
        &BLUE,
    ))?;
    chart.draw_series(points.iter().map(|&(seq, latency, status)| {
        Circle::new((seq, latency), POINT_RADIUS, status_color(status).filled())
    }))?;

    root.present()?;
    drop(chart);
    drop(root);
    Ok(Some(path))
}

/// Point color by status class; transport failures carry the 0 sentinel and
/// land in the catch-all gray.
fn status_color(status: u16) -> RGBColor {
    match status {
        200..=299 => GREEN,
        300..=399 => YELLOW,
        400..=499 => RGBColor(255, 165, 0),
        500..=599 => RED,
        _ => RGBColor(128, 128, 128),
    }
}
