use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use regionseek_core::config::FrontendConfig;
use regionseek_core::progress::{
    apply_event, DrainSummary, ProgressLogSource, ProgressPoller, ProgressTracker,
};

/// Floor for the poll and hold loops.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Args)]
pub struct WatchArgs {
    /// Progress log written by the index builder
    pub log: PathBuf,

    /// Poll interval in milliseconds (overrides the config)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

fn poll_interval(args: &WatchArgs, config: &FrontendConfig) -> Duration {
    args.interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.progress.poll_interval())
        .max(MIN_POLL_INTERVAL)
}

pub fn run(args: &WatchArgs, config: &FrontendConfig) -> Result<()> {
    let interval = poll_interval(args, config);

    let poller = ProgressPoller::spawn(ProgressLogSource::new(&args.log), interval)?;
    let mut tracker = ProgressTracker::from_config(&config.progress);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Indexing [{bar:40}] {pos:>3}% {msg}")?
            .progress_chars("=> "),
    );

    let mut summary = DrainSummary::default();
    while summary.terminal.is_none() {
        let Some(event) = poller.next_event(interval * 2) else {
            if poller.is_finished() {
                break;
            }
            continue;
        };

        apply_event(event, &mut tracker, &mut summary);
        for message in summary.errors.drain(..) {
            pb.println(format!("warning: {message}"));
        }

        if tracker.is_visible() {
            pb.set_position(tracker.value().clamp(0, 100) as u64);
            pb.set_message(tracker.status().to_string());
        }
    }

    match summary.terminal {
        Some(report) if report.is_failed() => {
            pb.abandon_with_message("failed");
            bail!("Index build failed: {}", report.message);
        }
        Some(_) => {
            pb.set_position(100);
            pb.finish_with_message("done");
            // Hold the finished bar until the tracker auto-hides it.
            while tracker.is_visible() {
                std::thread::sleep(interval.min(config.progress.auto_hide()));
            }
            tracker.tick();
            Ok(())
        }
        None => {
            pb.abandon_with_message("stopped");
            bail!("Progress feed ended before the build finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(interval_ms: Option<u64>) -> WatchArgs {
        WatchArgs {
            log: PathBuf::from("progress.log"),
            interval_ms,
        }
    }

    #[test]
    fn test_poll_interval_prefers_flag() {
        let config = FrontendConfig::default();
        assert_eq!(poll_interval(&args(Some(250)), &config), Duration::from_millis(250));
        assert_eq!(poll_interval(&args(None), &config), Duration::from_millis(1000));
    }

    #[test]
    fn test_zero_poll_interval_is_floored() {
        let mut config = FrontendConfig::default();
        assert_eq!(poll_interval(&args(Some(0)), &config), MIN_POLL_INTERVAL);

        config.progress.poll_interval_ms = 0;
        assert_eq!(poll_interval(&args(None), &config), MIN_POLL_INTERVAL);
    }
}
