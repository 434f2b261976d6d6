//! Conformance test helpers for the strata logging subsystem.
//!
//! Provides the shared [`CaptureSink`] used by the integration tests to
//! observe exactly what text a configured channel dispatched, plus small
//! constructors for capture-backed configs.

#![warn(missing_docs)]

use std::sync::{Arc, Mutex};
use strata_log::{LogConfig, Sink};

/// A sink that records every line it receives, for later assertions.
#[derive(Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Creates a shareable capture sink.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All lines received so far, in dispatch order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// The most recently received line, if any.
    pub fn last(&self) -> Option<String> {
        self.lines.lock().unwrap().last().cloned()
    }

    /// The number of lines received so far.
    pub fn count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    /// Forgets everything received so far.
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl Sink for CaptureSink {
    fn accept(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

/// Builds a config with capture sinks on both channels, no prefixes, and the
/// given registry capacity. Returns the config plus the log and diagnostic
/// captures.
pub fn capture_config(capacity: usize) -> (LogConfig, Arc<CaptureSink>, Arc<CaptureSink>) {
    let log = CaptureSink::new();
    let diag = CaptureSink::new();
    let config = LogConfig::with_registry(
        Some(log.clone()),
        None,
        Some(diag.clone()),
        None,
        capacity,
    )
    .expect("empty prefixes are always valid");
    (config, log, diag)
}

/// Builds a config with capture sinks and the given prefixes on both
/// channels, registry disabled.
pub fn prefixed_capture_config(
    log_prefix: &str,
    diag_prefix: &str,
) -> (LogConfig, Arc<CaptureSink>, Arc<CaptureSink>) {
    let log = CaptureSink::new();
    let diag = CaptureSink::new();
    let config = LogConfig::without_registry(
        Some(log.clone()),
        Some(log_prefix),
        Some(diag.clone()),
        Some(diag_prefix),
    )
    .expect("test prefixes are within bounds");
    (config, log, diag)
}
