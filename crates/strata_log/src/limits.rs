//! System-wide bounds for log message and prefix lengths.

/// Maximum length in bytes of a single log message body.
///
/// Text beyond this bound is truncated, never rejected. The same bound
/// applies to messages retained in the registry and to messages dispatched
/// live to a sink.
pub const MAX_LOG_MSG_LENGTH: usize = 200;

/// Bytes of [`MAX_LOG_MSG_LENGTH`] reserved for the message body when
/// validating a configured prefix.
///
/// A prefix is accepted only if its length is at most
/// `MAX_LOG_MSG_LENGTH - PREFIX_RESERVE`.
pub const PREFIX_RESERVE: usize = 10;

/// The maximum accepted length in bytes of a log or diagnostic prefix.
pub const MAX_PREFIX_LENGTH: usize = MAX_LOG_MSG_LENGTH - PREFIX_RESERVE;
