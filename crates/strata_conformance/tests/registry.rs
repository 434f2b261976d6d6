//! Tests for registry retention and retrieval: FIFO drains, LIFO pops,
//! overflow eviction, and discard semantics.

use strata_conformance::capture_config;
use strata_log::{LogError, Severity};

#[test]
fn mixed_severities_drain_oldest_first() {
    let (mut config, _log, diag) = capture_config(10);

    config.log(Severity::Warning, "Warning 1");
    config.log(Severity::Error, "Error 1");
    config.log(Severity::Warning, "Warning 2");
    config.log(Severity::Error, "Error 2");
    assert_eq!(config.registry().len(), 4);
    diag.clear();

    let emitted = config.emit_all(None);

    assert_eq!(emitted, 4);
    assert_eq!(diag.count(), 4);
    assert_eq!(diag.last().unwrap(), "Error: Error 2");
    assert_eq!(
        diag.lines(),
        [
            "Warning: Warning 1",
            "Error: Error 1",
            "Warning: Warning 2",
            "Error: Error 2",
        ]
    );
    assert_eq!(config.registry().len(), 0);
}

#[test]
fn drain_ignores_configured_diag_prefix() {
    let log = strata_conformance::CaptureSink::new();
    let diag = strata_conformance::CaptureSink::new();
    let mut config = strata_log::LogConfig::with_registry(
        Some(log),
        None,
        Some(diag.clone()),
        Some("live> "),
        10,
    )
    .unwrap();

    config.log(Severity::Error, "stored");
    assert_eq!(diag.last().unwrap(), "live> stored");

    config.emit_all(None);
    assert_eq!(diag.last().unwrap(), "Error: stored");
}

#[test]
fn drain_of_empty_registry_returns_zero() {
    let (mut config, _log, diag) = capture_config(10);
    assert_eq!(config.emit_all(None), 0);
    assert_eq!(diag.count(), 0);
}

#[test]
fn severity_filter_limits_dispatch_but_clears_everything() {
    let (mut config, _log, diag) = capture_config(10);
    config.log(Severity::Info, "progress note");
    config.log(Severity::Warning, "odd timestamp");
    config.log(Severity::Error, "bad CRC");
    diag.clear();

    let emitted = config.emit_all(Some(Severity::Error));

    assert_eq!(emitted, 1);
    assert_eq!(diag.lines(), ["Error: bad CRC"]);
    assert_eq!(config.registry().len(), 0);
}

#[test]
fn pop_returns_newest_first() {
    let (mut config, _log, _diag) = capture_config(10);
    config.log(Severity::Error, "First error");
    config.log(Severity::Error, "Second error");
    config.log(Severity::Error, "Third error");
    assert_eq!(config.registry().len(), 3);

    let mut buffer = [0u8; 256];

    let len = config.pop(&mut buffer).unwrap();
    assert_eq!(std::str::from_utf8(&buffer[..len]).unwrap(), "Third error");
    assert_eq!(config.registry().len(), 2);

    let len = config.pop(&mut buffer).unwrap();
    assert_eq!(std::str::from_utf8(&buffer[..len]).unwrap(), "Second error");
    assert_eq!(config.registry().len(), 1);

    let len = config.pop(&mut buffer).unwrap();
    assert_eq!(std::str::from_utf8(&buffer[..len]).unwrap(), "First error");
    assert_eq!(config.registry().len(), 0);

    // Empty registry: zero length, not an error.
    assert_eq!(config.pop(&mut buffer).unwrap(), 0);
}

#[test]
fn pop_with_empty_buffer_fails_without_removal() {
    let (mut config, _log, _diag) = capture_config(10);
    config.log(Severity::Error, "Test error");

    let result = config.pop(&mut []);

    assert!(matches!(result, Err(LogError::InvalidArgument(_))));
    assert_eq!(config.registry().len(), 1);
}

#[test]
fn overflow_keeps_the_most_recent_capacity_messages() {
    let (mut config, _log, diag) = capture_config(5);
    for i in 0..10 {
        config.log_args(Severity::Error, format_args!("Error {i}"));
    }

    // Live dispatch was never suppressed by eviction.
    assert_eq!(diag.count(), 10);
    assert_eq!(config.registry().len(), 5);

    diag.clear();
    config.emit_all(None);
    assert_eq!(
        diag.lines(),
        [
            "Error: Error 5",
            "Error: Error 6",
            "Error: Error 7",
            "Error: Error 8",
            "Error: Error 9",
        ]
    );
}

#[test]
fn free_all_discards_without_dispatch() {
    let (mut config, _log, diag) = capture_config(10);
    config.log(Severity::Error, "Error 2");
    config.log(Severity::Error, "Error 3");
    diag.clear();

    assert_eq!(config.free_all(), 2);
    assert_eq!(config.registry().len(), 0);
    assert_eq!(diag.count(), 0);
    assert_eq!(config.free_all(), 0);
}

#[test]
fn reinitializing_to_zero_capacity_clears_and_disables() {
    let (mut config, _log, _diag) = capture_config(10);
    config.log(Severity::Error, "about to vanish");
    assert_eq!(config.registry().len(), 1);

    config.initialize(None, None, None, None, 0).unwrap();

    assert_eq!(config.registry().len(), 0);
    config.log(Severity::Error, "not retained");
    assert_eq!(config.registry().len(), 0);

    // Raising the capacity again re-enables retention.
    config.initialize(None, None, None, None, 3).unwrap();
    config.log(Severity::Error, "retained again");
    assert_eq!(config.registry().len(), 1);
}

#[test]
fn pop_message_matches_buffer_pop_order() {
    let (mut config, _log, _diag) = capture_config(10);
    config.log(Severity::Warning, "older");
    config.log(Severity::Error, "newer");

    let first = config.pop_message().unwrap();
    assert_eq!(first.text(), "newer");
    assert_eq!(first.severity(), Severity::Error);

    let second = config.pop_message().unwrap();
    assert_eq!(second.text(), "older");
    assert!(config.pop_message().is_none());
}
