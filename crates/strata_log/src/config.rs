//! Logging configuration: sink selection, prefixes, and the embedded
//! message registry.

use crate::error::LogError;
use crate::limits::{MAX_LOG_MSG_LENGTH, MAX_PREFIX_LENGTH};
use crate::message::Message;
use crate::registry::MessageRegistry;
use crate::severity::Severity;
use crate::sink::{ConsoleDiag, ConsoleLog, Sink};
use crate::text::{render_bounded, truncate_utf8};
use std::fmt;
use std::sync::Arc;

/// Routing state for one logging scope.
///
/// A `LogConfig` holds the two sink capabilities (the log channel for
/// [`Severity::Info`], the diagnostic channel for warnings and errors), the
/// prefixes prepended to live output, and an embedded [`MessageRegistry`]
/// for deferred inspection.
///
/// Instances provide no internal synchronization: within one thread,
/// `&mut self` gives every operation a strict sequential history, and
/// sharing an instance across threads requires external mutual exclusion.
/// Per-thread instances, including the per-thread default behind
/// [`global`](crate::global), are the recommended pattern for concurrent
/// use.
pub struct LogConfig {
    log_sink: Arc<dyn Sink>,
    diag_sink: Arc<dyn Sink>,
    log_prefix: String,
    diag_prefix: String,
    registry: MessageRegistry,
}

impl LogConfig {
    /// Creates a config with the built-in console sinks, empty prefixes,
    /// and a disabled registry.
    pub fn new() -> Self {
        Self {
            log_sink: Arc::new(ConsoleLog),
            diag_sink: Arc::new(ConsoleDiag),
            log_prefix: String::new(),
            diag_prefix: String::new(),
            registry: MessageRegistry::new(0),
        }
    }

    /// Constructs a fresh config from the given sinks, prefixes, and
    /// registry capacity.
    ///
    /// An absent sink selects the matching built-in console writer; an
    /// absent prefix is empty. A prefix over the bound makes construction
    /// fail after routing a diagnostic through the default console
    /// diagnostic sink.
    pub fn with_registry(
        log_sink: Option<Arc<dyn Sink>>,
        log_prefix: Option<&str>,
        diag_sink: Option<Arc<dyn Sink>>,
        diag_prefix: Option<&str>,
        registry_capacity: usize,
    ) -> Result<Self, LogError> {
        let mut config = Self::new();
        config.initialize(log_sink, log_prefix, diag_sink, diag_prefix, registry_capacity)?;
        Ok(config)
    }

    /// Convenience constructor for call sites that never want message
    /// retention: delegates to [`with_registry`](Self::with_registry) with a
    /// capacity of `0`.
    pub fn without_registry(
        log_sink: Option<Arc<dyn Sink>>,
        log_prefix: Option<&str>,
        diag_sink: Option<Arc<dyn Sink>>,
        diag_prefix: Option<&str>,
    ) -> Result<Self, LogError> {
        Self::with_registry(log_sink, log_prefix, diag_sink, diag_prefix, 0)
    }

    /// Reconfigures this instance in place.
    ///
    /// Every channel is set on every call: an absent sink resets that
    /// channel to its built-in console writer and an absent prefix resets to
    /// empty, never "leave unchanged". Validation runs before any mutation;
    /// if a defaulted prefix exceeds the bound, a descriptive diagnostic is
    /// routed through the diagnostic path currently in effect (pre-call
    /// sink, prefix, and registry) and the call fails with this instance's
    /// sinks, prefixes, and registry contents untouched.
    ///
    /// On success the registry capacity is replaced, which unconditionally
    /// discards any previously stored messages.
    pub fn initialize(
        &mut self,
        log_sink: Option<Arc<dyn Sink>>,
        log_prefix: Option<&str>,
        diag_sink: Option<Arc<dyn Sink>>,
        diag_prefix: Option<&str>,
        registry_capacity: usize,
    ) -> Result<(), LogError> {
        let log_prefix = log_prefix.unwrap_or("");
        let diag_prefix = diag_prefix.unwrap_or("");

        if log_prefix.len() > MAX_PREFIX_LENGTH {
            self.report_config_error("ERROR: log message prefix is too large");
            return Err(LogError::LogPrefixTooLarge);
        }
        if diag_prefix.len() > MAX_PREFIX_LENGTH {
            self.report_config_error("ERROR: error message prefix is too large");
            return Err(LogError::ErrorPrefixTooLarge);
        }

        self.log_sink = log_sink.unwrap_or_else(|| Arc::new(ConsoleLog));
        self.diag_sink = diag_sink.unwrap_or_else(|| Arc::new(ConsoleDiag));
        self.log_prefix = log_prefix.to_string();
        self.diag_prefix = diag_prefix.to_string();
        self.registry.set_capacity(registry_capacity);
        Ok(())
    }

    // Configuration failures go out the live diagnostic channel but are not
    // retained; a failed initialize must leave registry contents untouched.
    fn report_config_error(&self, detail: &str) {
        let line = format!("{}{}", self.diag_prefix, detail);
        self.diag_sink.accept(&line);
    }

    /// Emits one message.
    ///
    /// The body is truncated to [`MAX_LOG_MSG_LENGTH`], prepended with the
    /// channel prefix, and dispatched: the log sink for
    /// [`Severity::Info`], the diagnostic sink otherwise. When the registry
    /// is enabled the unprefixed body is also retained, evicting the oldest
    /// stored message first if the registry is full. Eviction never
    /// suppresses the live dispatch, and this call never fails observably.
    pub fn log(&mut self, severity: Severity, text: &str) {
        let body = truncate_utf8(text, MAX_LOG_MSG_LENGTH);
        let line = if severity == Severity::Info {
            format!("{}{}", self.log_prefix, body)
        } else {
            format!("{}{}", self.diag_prefix, body)
        };
        if severity == Severity::Info {
            self.log_sink.accept(&line);
        } else {
            self.diag_sink.accept(&line);
        }
        self.registry.store(severity, body);
    }

    /// Renders a format template with its arguments into a bounded body and
    /// emits it via [`log`](Self::log).
    pub fn log_args(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        let body = render_bounded(args, MAX_LOG_MSG_LENGTH);
        self.log(severity, &body);
    }

    /// Dispatches every stored message, oldest first, through the
    /// diagnostic sink and clears the registry.
    ///
    /// Each message is rendered as its severity's fixed
    /// [`registry_label`](Severity::registry_label) followed by the stored
    /// body; the configured diagnostic prefix does not apply to drains.
    /// Messages below `min_severity` are skipped but still discarded.
    /// Returns the number dispatched; `0` for an empty registry.
    pub fn emit_all(&mut self, min_severity: Option<Severity>) -> usize {
        let mut emitted = 0;
        for message in self.registry.take_all() {
            if min_severity.is_some_and(|min| message.severity() < min) {
                continue;
            }
            let line = format!("{}{}", message.severity().registry_label(), message.text());
            self.diag_sink.accept(&line);
            emitted += 1;
        }
        emitted
    }

    /// Removes the most recently stored message and writes its body into
    /// `buffer`, returning the number of bytes written.
    ///
    /// The opposite retrieval order from [`emit_all`](Self::emit_all): pops
    /// are newest-first. A body longer than the buffer is truncated on a
    /// character boundary. An empty buffer fails with
    /// [`LogError::InvalidArgument`] and removes nothing; an empty registry
    /// returns `Ok(0)`, which is not an error.
    pub fn pop(&mut self, buffer: &mut [u8]) -> Result<usize, LogError> {
        if buffer.is_empty() {
            return Err(LogError::InvalidArgument("output buffer is empty"));
        }
        let Some(message) = self.registry.pop_newest() else {
            return Ok(0);
        };
        let body = truncate_utf8(message.text(), buffer.len());
        buffer[..body.len()].copy_from_slice(body.as_bytes());
        Ok(body.len())
    }

    /// Removes and returns the most recently stored message, or `None` if
    /// the registry is empty.
    pub fn pop_message(&mut self) -> Option<Message> {
        self.registry.pop_newest()
    }

    /// Discards every stored message without dispatching any of them and
    /// returns the number discarded.
    pub fn free_all(&mut self) -> usize {
        self.registry.free_all()
    }

    /// The embedded message registry, for inspection.
    pub fn registry(&self) -> &MessageRegistry {
        &self.registry
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}
