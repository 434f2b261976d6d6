//! Error types for logging configuration and registry retrieval.

/// Errors reported by [`LogConfig`](crate::LogConfig) operations.
///
/// Empty-registry drains and pops are not errors; they return a zero count.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log prefix exceeds the configurable bound.
    #[error("log message prefix is too large")]
    LogPrefixTooLarge,

    /// The diagnostic prefix exceeds the configurable bound.
    #[error("error message prefix is too large")]
    ErrorPrefixTooLarge,

    /// A retrieval call was made with an unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
