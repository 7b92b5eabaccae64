use std::io::{IsTerminal, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::sync::broadcast;
use tokio::time::Instant;

const BAR_WIDTH: usize = 30;

/// Renders a progress line on stderr until the shutdown signal arrives.
///
/// `goal` is the expected outcome count for count-bound attacks; deadline
/// bound attacks pass `None` and get a running count instead of a bar.
pub fn setup_progress_indicator(
    goal: Option<usize>,
    completed: Arc<AtomicUsize>,
    shutdown_tx: &broadcast::Sender<()>,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();

    tokio::spawn(async move {
        if !std::io::stderr().is_terminal() {
            return;
        }

        let start = Instant::now();
        let mut ticker = tokio::time::interval(Duration::from_millis(250));

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    let done = completed.load(Ordering::Relaxed);
                    if render_line(done, goal, start.elapsed()).is_err() {
                        break;
                    }
                    drop(finish_line());
                    break;
                }
                _ = ticker.tick() => {
                    let done = completed.load(Ordering::Relaxed);
                    if render_line(done, goal, start.elapsed()).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

fn render_line(
    done: usize,
    goal: Option<usize>,
    elapsed: Duration,
) -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;

    match goal {
        Some(goal) => {
            let goal = goal.max(1);
            let done = done.min(goal);
            let filled = done.saturating_mul(BAR_WIDTH) / goal;
            let percent = done.saturating_mul(100) / goal;
            let bar = format!(
                "[{}{}]",
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH.saturating_sub(filled))
            );
            queue!(
                out,
                Print(bar),
                SetForegroundColor(Color::Cyan),
                Print(format!(" {}/{} ({}%)", done, goal, percent)),
                ResetColor,
                SetForegroundColor(Color::Yellow),
                Print(format!(" | {:.1}s", elapsed.as_secs_f64())),
                ResetColor
            )?;
        }
        None => {
            queue!(
                out,
                Print(format!(
                    "{} requests completed | {:.1}s",
                    done,
                    elapsed.as_secs_f64()
                ))
            )?;
        }
    }
    out.flush()
}

fn finish_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    out.write_all(b"\n")?;
    out.flush()
}
