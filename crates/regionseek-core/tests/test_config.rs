use regionseek_core::config::{FrontendConfig, ProgressConfig};
use regionseek_core::progress::{ManualClock, ProgressTracker};
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = FrontendConfig::default();
    assert_eq!(config.api.base_url, "/api");
    assert_eq!(config.api.timeout(), Duration::from_secs(30));
    assert_eq!(config.selector.stroke_width, 2);
    assert_eq!(config.selector.stroke_color, [0x42, 0xb9, 0x83, 0xff]);
    assert_eq!(config.progress.auto_hide(), Duration::from_millis(2000));
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = FrontendConfig::from_toml_str(
        r#"
[progress]
auto_hide_ms = 500
"#,
    )
    .unwrap();
    assert_eq!(config.progress.auto_hide_ms, 500);
    assert_eq!(config.progress.poll_interval_ms, 1000);
    assert_eq!(config.api.base_url, "/api");
}

#[test]
fn test_toml_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regionseek.toml");

    let mut config = FrontendConfig::default();
    config.api.base_url = "http://localhost:5000/api".into();
    config.selector.stroke_width = 3;
    config.save(&path).unwrap();

    assert_eq!(FrontendConfig::load(&path).unwrap(), config);
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(FrontendConfig::from_toml_str("[progress]\nauto_hide_ms = \"soon\"").is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FrontendConfig::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_tracker_uses_configured_delay() {
    let progress = ProgressConfig {
        auto_hide_ms: 100,
        ..ProgressConfig::default()
    };
    let clock = ManualClock::new();
    let mut tracker = ProgressTracker::with_clock_and_delay(clock.clone(), progress.auto_hide());
    tracker.set_progress(100, "done");
    clock.advance_ms(100);
    assert!(!tracker.is_visible());
}
