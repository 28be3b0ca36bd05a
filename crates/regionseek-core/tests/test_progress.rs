use std::time::{Duration, Instant};

use regionseek_core::progress::{
    visibility, LoadingState, ManualClock, ProgressPhase, ProgressTracker,
};

fn tracker() -> (ManualClock, ProgressTracker<ManualClock>) {
    let clock = ManualClock::new();
    let tracker = ProgressTracker::with_clock(clock.clone());
    (clock, tracker)
}

#[test]
fn test_starts_idle() {
    let (_, t) = tracker();
    assert_eq!(t.value(), 0);
    assert_eq!(t.status(), "");
    assert!(!t.is_visible());
    assert_eq!(t.phase(), ProgressPhase::Idle);
}

#[test]
fn test_partial_progress_is_visible() {
    let (_, mut t) = tracker();
    t.set_progress(50, "");
    assert!(t.is_visible());
    assert_eq!(t.phase(), ProgressPhase::Active);
}

#[test]
fn test_zero_progress_is_hidden() {
    let (_, mut t) = tracker();
    t.set_progress(50, "");
    t.set_progress(0, "");
    assert!(!t.is_visible());
    assert_eq!(t.phase(), ProgressPhase::Idle);
}

#[test]
fn test_done_hides_exactly_after_delay() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "done");
    assert!(t.is_visible());
    assert_eq!(t.phase(), ProgressPhase::Completing);

    clock.advance_ms(1999);
    assert!(t.is_visible());

    clock.advance_ms(1);
    assert!(!t.is_visible());
    assert_eq!(t.phase(), ProgressPhase::Finished);
    assert_eq!(t.value(), 100);
    assert_eq!(t.status(), "done");
}

#[test]
fn test_new_progress_cancels_pending_hide() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "done");
    clock.advance_ms(500);
    t.set_progress(10, "");

    clock.advance_ms(1500);
    assert!(t.is_visible());
    clock.advance_ms(10_000);
    assert!(t.is_visible());
    assert!(!t.tick());
    assert_eq!(t.phase(), ProgressPhase::Active);
}

#[test]
fn test_second_done_restarts_timer() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "done");
    clock.advance_ms(1500);
    t.set_progress(100, "done");

    clock.advance_ms(1000);
    assert!(t.is_visible());
    clock.advance_ms(1000);
    assert!(!t.is_visible());
}

#[test]
fn test_reset_cancels_pending_hide() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "done");
    clock.advance_ms(100);
    t.reset();

    assert_eq!(t.value(), 0);
    assert_eq!(t.status(), "");
    assert!(!t.is_visible());
    assert!(!t.hide_pending());

    t.show();
    clock.advance_ms(5000);
    assert!(!t.tick());
    assert!(t.is_visible());
}

#[test]
fn test_show_cancels_pending_hide() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "done");
    t.show();
    clock.advance_ms(2500);
    assert!(t.is_visible());
    assert_eq!(t.value(), 100);
}

#[test]
fn test_hide_cancels_pending_hide() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "done");
    t.hide();
    assert!(!t.is_visible());
    assert!(!t.hide_pending());
    clock.advance_ms(2500);
    assert!(!t.tick());
}

#[test]
fn test_show_before_first_percentage() {
    let (_, mut t) = tracker();
    t.show();
    assert!(t.is_visible());
    assert_eq!(t.value(), 0);
    assert_eq!(t.phase(), ProgressPhase::Active);
}

#[test]
fn test_done_below_hundred_is_hidden_without_timer() {
    let (_, mut t) = tracker();
    t.set_progress(40, "done");
    assert!(!t.is_visible());
    assert!(!t.hide_pending());
}

#[test]
fn test_hundred_without_done_stays_visible() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "processing");
    clock.advance_ms(60_000);
    assert!(t.is_visible());
}

#[test]
fn test_out_of_range_values_are_not_clamped() {
    let (_, mut t) = tracker();
    t.set_progress(150, "");
    assert_eq!(t.value(), 150);
    assert!(t.is_visible());

    t.set_progress(-5, "");
    assert_eq!(t.value(), -5);
    assert!(!t.is_visible());
}

#[test]
fn test_tick_fires_once() {
    let (clock, mut t) = tracker();
    t.set_progress(100, "done");
    assert!(!t.tick());
    clock.advance_ms(2000);
    assert!(t.tick());
    assert!(!t.tick());
    assert!(!t.is_visible());
}

#[test]
fn test_custom_auto_hide_delay() {
    let clock = ManualClock::new();
    let mut t = ProgressTracker::with_clock_and_delay(clock.clone(), Duration::from_millis(300));
    t.set_progress(100, "done");
    clock.advance_ms(299);
    assert!(t.is_visible());
    clock.advance_ms(1);
    assert!(!t.is_visible());
}

#[test]
fn test_snapshot() {
    let (_, mut t) = tracker();
    t.set_progress(42, "processing");
    let snap = t.snapshot();
    assert_eq!(snap.value, 42);
    assert_eq!(snap.status, "processing");
    assert!(snap.visible);
}

#[test]
fn test_visibility_function() {
    let now = Instant::now();
    let later = now + Duration::from_millis(10);
    assert!(visibility(true, None, now));
    assert!(!visibility(false, None, now));
    assert!(visibility(true, Some(later), now));
    assert!(!visibility(true, Some(later), later));
    assert!(!visibility(false, Some(later), now));
}

#[test]
fn test_loading_state() {
    let mut loading = LoadingState::default();
    assert!(!loading.loading);

    loading.start_loading(None);
    assert!(loading.loading);
    assert_eq!(loading.message, "Loading...");

    loading.start_loading(Some("Building index"));
    assert_eq!(loading.message, "Building index");

    loading.stop_loading("");
    assert!(!loading.loading);
    assert_eq!(loading.message, "");
}
