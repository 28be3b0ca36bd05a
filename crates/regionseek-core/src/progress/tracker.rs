use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ProgressConfig;
use crate::consts::{DEFAULT_AUTO_HIDE_MS, PROGRESS_COMPLETE, STATUS_DONE};

use super::clock::{Clock, SystemClock};

/// Coarse state of a [`ProgressTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressPhase {
    /// Nothing to show.
    Idle,
    /// Visible and not waiting to auto-hide.
    Active,
    /// Reported done; visible until the hide timer fires.
    Completing,
    /// Reported done and already hidden. Value and status are kept.
    Finished,
}

impl std::fmt::Display for ProgressPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Active => write!(f, "Active"),
            Self::Completing => write!(f, "Completing"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// What a host needs to draw the indicator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub value: i32,
    pub status: String,
    pub visible: bool,
}

/// Visibility given the stored flag and the pending hide deadline.
pub fn visibility(visible: bool, hide_at: Option<Instant>, now: Instant) -> bool {
    visible && hide_at.map_or(true, |deadline| now < deadline)
}

fn is_completion(value: i32, status: &str) -> bool {
    status == STATUS_DONE && value == PROGRESS_COMPLETE
}

/// Percentage/status pair with a derived, auto-hiding visibility flag.
///
/// The hide timer is a deadline rather than a callback: every mutating call
/// overwrites it, so a superseded timer can never hide the indicator.
#[derive(Debug)]
pub struct ProgressTracker<C: Clock = SystemClock> {
    value: i32,
    status: String,
    visible: bool,
    hide_at: Option<Instant>,
    auto_hide: Duration,
    clock: C,
}

impl Default for ProgressTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn from_config(config: &ProgressConfig) -> Self {
        Self::with_clock_and_delay(SystemClock, config.auto_hide())
    }
}

impl<C: Clock> ProgressTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_clock_and_delay(clock, Duration::from_millis(DEFAULT_AUTO_HIDE_MS))
    }

    pub fn with_clock_and_delay(clock: C, auto_hide: Duration) -> Self {
        Self {
            value: 0,
            status: String::new(),
            visible: false,
            hide_at: None,
            auto_hide,
            clock,
        }
    }

    /// Record a progress update. Values are stored as given, without clamping.
    pub fn set_progress(&mut self, value: i32, status: &str) {
        self.value = value;
        self.status = status.to_string();

        if is_completion(value, status) {
            self.visible = true;
            self.hide_at = Some(self.clock.now() + self.auto_hide);
            info!("progress complete; hiding in {:?}", self.auto_hide);
        } else {
            self.visible = value > 0 && status != STATUS_DONE;
            self.hide_at = None;
        }
    }

    pub fn reset(&mut self) {
        self.value = 0;
        self.status.clear();
        self.visible = false;
        self.hide_at = None;
    }

    /// Pin the indicator visible, keeping value and status.
    pub fn show(&mut self) {
        self.visible = true;
        self.hide_at = None;
    }

    /// Hide the indicator, keeping value and status.
    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Apply an expired hide timer to the stored state. Returns true if it fired.
    ///
    /// Reads are correct without calling this; it only lets hosts observe the
    /// transition.
    pub fn tick(&mut self) -> bool {
        match self.hide_at {
            Some(deadline) if self.clock.now() >= deadline => {
                self.visible = false;
                self.hide_at = None;
                debug!("progress auto-hidden");
                true
            }
            _ => false,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_visible(&self) -> bool {
        visibility(self.visible, self.hide_at, self.clock.now())
    }

    /// True while a hide timer is armed and has not expired.
    pub fn hide_pending(&self) -> bool {
        self.hide_at.is_some_and(|deadline| self.clock.now() < deadline)
    }

    pub fn phase(&self) -> ProgressPhase {
        let visible = self.is_visible();
        if visible && self.hide_pending() {
            ProgressPhase::Completing
        } else if visible {
            ProgressPhase::Active
        } else if is_completion(self.value, &self.status) {
            ProgressPhase::Finished
        } else {
            ProgressPhase::Idle
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            value: self.value,
            status: self.status.clone(),
            visible: self.is_visible(),
        }
    }
}
