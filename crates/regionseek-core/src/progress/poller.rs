use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;

use super::clock::Clock;
use super::feed::{ProgressReport, ProgressSource};
use super::tracker::ProgressTracker;

/// Message from the polling thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollEvent {
    Report(ProgressReport),
    Error(String),
}

/// Result of feeding queued events into a tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrainSummary {
    pub applied: usize,
    pub errors: Vec<String>,
    /// Set once a done or failed report went through.
    pub terminal: Option<ProgressReport>,
}

/// Background thread that asks a [`ProgressSource`] for updates on a fixed
/// interval and queues them for the host.
///
/// Polling ends after a terminal report, on [`stop`](Self::stop), or when the
/// poller is dropped.
pub struct ProgressPoller {
    events: Receiver<PollEvent>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressPoller {
    pub fn spawn<S>(source: S, interval: Duration) -> Result<Self>
    where
        S: ProgressSource + 'static,
    {
        let (event_tx, events) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel();

        let handle = std::thread::Builder::new()
            .name("regionseek-poller".into())
            .spawn(move || poll_loop(source, interval, event_tx, stop_rx))?;

        Ok(Self {
            events,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Events queued so far, without waiting.
    pub fn try_events(&self) -> impl Iterator<Item = PollEvent> + '_ {
        self.events.try_iter()
    }

    /// Wait up to `timeout` for the next event. `None` on timeout or once the
    /// thread has finished and the queue is empty.
    pub fn next_event(&self, timeout: Duration) -> Option<PollEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Feed every queued report into `tracker`, in arrival order.
    pub fn drain_into<C: Clock>(&self, tracker: &mut ProgressTracker<C>) -> DrainSummary {
        let mut summary = DrainSummary::default();
        for event in self.try_events() {
            apply_event(event, tracker, &mut summary);
        }
        summary
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Ask the thread to stop and wait for it.
    pub fn stop(&mut self) {
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("progress poller thread panicked");
            }
        }
    }
}

impl Drop for ProgressPoller {
    fn drop(&mut self) {
        // Closing the stop channel wakes the thread.
        self.stop_tx.take();
    }
}

/// Apply one poll event to a tracker, recording it in `summary`.
pub fn apply_event<C: Clock>(
    event: PollEvent,
    tracker: &mut ProgressTracker<C>,
    summary: &mut DrainSummary,
) {
    match event {
        PollEvent::Report(report) => {
            tracker.set_progress(report.value, report.normalized_status());
            summary.applied += 1;
            if report.is_terminal() {
                summary.terminal = Some(report);
            }
        }
        PollEvent::Error(message) => summary.errors.push(message),
    }
}

fn poll_loop<S: ProgressSource>(
    mut source: S,
    interval: Duration,
    events: Sender<PollEvent>,
    stop: Receiver<()>,
) {
    loop {
        let event = match source.fetch() {
            Ok(report) => PollEvent::Report(report),
            Err(e) => {
                warn!("progress fetch failed: {e}");
                PollEvent::Error(e.to_string())
            }
        };

        let terminal = matches!(&event, PollEvent::Report(r) if r.is_terminal());
        if events.send(event).is_err() || terminal {
            break;
        }

        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!("progress poller stopped");
}
