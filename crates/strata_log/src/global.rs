//! The default logging instance and its free-function facade.
//!
//! Every function here targets a [`LogConfig`] created lazily the first time
//! the current thread touches it and kept alive for the rest of the thread;
//! there is no teardown step. The default instance starts with the built-in
//! console sinks, empty prefixes, and a disabled registry until
//! [`configure`] raises the capacity.
//!
//! The default instance is scoped per thread, so threads can carry
//! independent prefixes and registries without any locking: workers
//! processing separate files configure and drain their own diagnostics
//! without observing each other. Nothing here synchronizes across threads.
//!
//! Sinks installed on the default instance must not call back into this
//! module from the same thread; the instance is borrowed for the duration of
//! each call.

use crate::config::LogConfig;
use crate::error::LogError;
use crate::severity::Severity;
use crate::sink::Sink;
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

thread_local! {
    static DEFAULT: RefCell<LogConfig> = RefCell::new(LogConfig::new());
}

/// Runs `f` with exclusive access to the current thread's default instance.
///
/// The escape hatch for operations without a dedicated free function here,
/// e.g. inspecting `config.registry().len()`.
pub fn with_default<R>(f: impl FnOnce(&mut LogConfig) -> R) -> R {
    DEFAULT.with(|config| f(&mut config.borrow_mut()))
}

/// Reconfigures the current thread's default instance.
///
/// Same contract as [`LogConfig::initialize`]: absent sinks and prefixes
/// reset to the built-in console writers and empty strings, prefix
/// validation failures are routed through the pre-call diagnostic path and
/// leave the instance untouched, and a successful call replaces the registry
/// capacity, discarding stored messages.
pub fn configure(
    log_sink: Option<Arc<dyn Sink>>,
    log_prefix: Option<&str>,
    diag_sink: Option<Arc<dyn Sink>>,
    diag_prefix: Option<&str>,
    registry_capacity: usize,
) -> Result<(), LogError> {
    with_default(|config| {
        config.initialize(log_sink, log_prefix, diag_sink, diag_prefix, registry_capacity)
    })
}

/// Reconfigures the current thread's default instance with retention
/// disabled, for call sites that never want a registry.
pub fn configure_without_registry(
    log_sink: Option<Arc<dyn Sink>>,
    log_prefix: Option<&str>,
    diag_sink: Option<Arc<dyn Sink>>,
    diag_prefix: Option<&str>,
) -> Result<(), LogError> {
    configure(log_sink, log_prefix, diag_sink, diag_prefix, 0)
}

/// Renders a format template and emits it through the default instance.
///
/// Callers build the arguments with `format_args!`:
///
/// ```
/// use strata_log::{global, Severity};
///
/// global::log(Severity::Warning, format_args!("short read: {} of {} bytes", 12, 64));
/// ```
pub fn log(severity: Severity, args: fmt::Arguments<'_>) {
    with_default(|config| config.log_args(severity, args));
}

/// Emits already-rendered text through the default instance.
pub fn log_text(severity: Severity, text: &str) {
    with_default(|config| config.log(severity, text));
}

/// Drains the default instance's registry oldest-first through its
/// diagnostic sink; see [`LogConfig::emit_all`].
pub fn emit_all(min_severity: Option<Severity>) -> usize {
    with_default(|config| config.emit_all(min_severity))
}

/// Pops the newest stored message from the default instance into `buffer`;
/// see [`LogConfig::pop`].
pub fn pop(buffer: &mut [u8]) -> Result<usize, LogError> {
    with_default(|config| config.pop(buffer))
}

/// Discards all stored messages on the default instance without dispatching
/// them and returns the number discarded.
pub fn free_all() -> usize {
    with_default(|config| config.free_all())
}

/// Pops every stored message from the default instance, newest first, and
/// returns the bodies.
///
/// Leaves the registry empty; an empty registry yields an empty vector.
pub fn collect_messages() -> Vec<String> {
    with_default(|config| {
        let mut messages = Vec::with_capacity(config.registry().len());
        while let Some(message) = config.pop_message() {
            messages.push(message.text().to_string());
        }
        messages
    })
}

/// Clears all stored messages on the default instance and returns the
/// number cleared. Alias for [`free_all`] matching drain-and-discard call
/// sites.
pub fn clear_messages() -> usize {
    free_all()
}
