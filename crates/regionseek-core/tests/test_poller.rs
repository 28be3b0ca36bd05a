use std::time::Duration;

use regionseek_core::error::{RegionSeekError, Result};
use regionseek_core::progress::{
    ManualClock, PollEvent, ProgressPhase, ProgressPoller, ProgressReport, ProgressSource,
    ProgressTracker, ScriptedSource,
};

const WAIT: Duration = Duration::from_secs(5);

fn build_script() -> ScriptedSource {
    ScriptedSource::new(vec![
        ProgressReport::new(10, "processing", "found images"),
        ProgressReport::new(70, "processing", "features extracted"),
        ProgressReport::new(100, "completed", "index built"),
    ])
}

fn wait_finished(poller: &ProgressPoller) {
    for _ in 0..1000 {
        if poller.is_finished() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("poller did not finish");
}

#[test]
fn test_poller_stops_after_terminal_report() {
    let poller = ProgressPoller::spawn(build_script(), Duration::from_millis(1)).unwrap();

    let mut values = Vec::new();
    while let Some(event) = poller.next_event(WAIT) {
        match event {
            PollEvent::Report(r) => values.push(r.value),
            PollEvent::Error(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(values, vec![10, 70, 100]);
    wait_finished(&poller);
}

#[test]
fn test_drain_into_tracker() {
    let poller = ProgressPoller::spawn(build_script(), Duration::from_millis(1)).unwrap();
    wait_finished(&poller);

    let clock = ManualClock::new();
    let mut tracker = ProgressTracker::with_clock(clock.clone());
    let summary = poller.drain_into(&mut tracker);

    assert_eq!(summary.applied, 3);
    assert!(summary.errors.is_empty());
    assert_eq!(summary.terminal.map(|r| r.value), Some(100));

    // "completed" was mapped onto the tracker's "done".
    assert_eq!(tracker.status(), "done");
    assert_eq!(tracker.phase(), ProgressPhase::Completing);
    clock.advance_ms(2000);
    assert_eq!(tracker.phase(), ProgressPhase::Finished);
}

#[test]
fn test_failed_report_is_terminal() {
    let source = ScriptedSource::new(vec![
        ProgressReport::new(20, "processing", ""),
        ProgressReport::new(0, "failed", "no images"),
        ProgressReport::new(50, "processing", "never sent"),
    ]);
    let poller = ProgressPoller::spawn(source, Duration::from_millis(1)).unwrap();
    wait_finished(&poller);

    let mut tracker = ProgressTracker::with_clock(ManualClock::new());
    let summary = poller.drain_into(&mut tracker);
    assert_eq!(summary.applied, 2);
    assert!(summary.terminal.unwrap().is_failed());
    assert!(!tracker.is_visible());
}

struct FlakySource {
    calls: usize,
}

impl ProgressSource for FlakySource {
    fn fetch(&mut self) -> Result<ProgressReport> {
        self.calls += 1;
        if self.calls == 1 {
            Err(RegionSeekError::Source("connection refused".into()))
        } else {
            Ok(ProgressReport::new(100, "done", ""))
        }
    }
}

#[test]
fn test_fetch_errors_are_reported_and_polling_continues() {
    let poller = ProgressPoller::spawn(FlakySource { calls: 0 }, Duration::from_millis(1)).unwrap();
    wait_finished(&poller);

    let mut tracker = ProgressTracker::with_clock(ManualClock::new());
    let summary = poller.drain_into(&mut tracker);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].contains("connection refused"));
    assert_eq!(summary.applied, 1);
    assert!(tracker.is_visible());
}

#[test]
fn test_stop_interrupts_long_interval() {
    let source = ScriptedSource::new(vec![ProgressReport::new(5, "processing", "")]);
    let mut poller = ProgressPoller::spawn(source, Duration::from_secs(3600)).unwrap();

    assert!(matches!(poller.next_event(WAIT), Some(PollEvent::Report(_))));
    poller.stop();
    assert!(poller.is_finished());
    assert_eq!(poller.next_event(Duration::from_millis(10)), None);
}
