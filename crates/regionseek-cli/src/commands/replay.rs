use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use regionseek_core::config::FrontendConfig;
use regionseek_core::progress::{ManualClock, ProgressReport, ProgressTracker};

use crate::summary::print_progress_step;

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON lines file, one `{"value": .., "status": ..}` report per line
    pub reports: PathBuf,

    /// Simulated time between two reports in milliseconds (defaults to the poll interval)
    #[arg(long)]
    pub step_ms: Option<u64>,
}

pub fn run(args: &ReplayArgs, config: &FrontendConfig) -> Result<()> {
    let text = std::fs::read_to_string(&args.reports)
        .with_context(|| format!("Failed to read {}", args.reports.display()))?;
    let step_ms = args.step_ms.unwrap_or(config.progress.poll_interval_ms);

    let clock = ManualClock::new();
    let mut tracker =
        ProgressTracker::with_clock_and_delay(clock.clone(), config.progress.auto_hide());
    let mut elapsed = 0u64;

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let report = ProgressReport::from_json(line)
            .with_context(|| format!("Bad report on line {}", line_no + 1))?;

        tracker.set_progress(report.value, report.normalized_status());
        print_progress_step(elapsed, &tracker.snapshot(), tracker.phase());

        clock.advance_ms(step_ms);
        elapsed += step_ms;
    }

    // Let a pending auto-hide play out.
    if tracker.hide_pending() {
        clock.advance(config.progress.auto_hide());
        elapsed += config.progress.auto_hide_ms;
        tracker.tick();
        print_progress_step(elapsed, &tracker.snapshot(), tracker.phase());
    }

    Ok(())
}
