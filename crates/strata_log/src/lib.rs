//! Log and diagnostic message routing for the strata data-format library.
//!
//! This crate routes human-readable log and diagnostic text to pluggable
//! [`Sink`] implementations and can retain diagnostic messages in a bounded
//! [`MessageRegistry`] for deferred inspection, useful when the library runs
//! silently inside a larger pipeline and failures must be collected rather
//! than printed immediately. Emission happens through a [`LogConfig`], either
//! an explicit instance owned by the caller or the per-thread default
//! instance behind the [`global`] facade.
//!
//! No operation here blocks, spawns, or synchronizes internally. A
//! [`LogConfig`] is plain mutable state: sharing one instance across threads
//! requires external mutual exclusion, which is why the default instance is
//! scoped per thread rather than per process.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod global;
pub mod limits;
pub mod message;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod text;

pub use config::LogConfig;
pub use error::LogError;
pub use limits::{MAX_LOG_MSG_LENGTH, MAX_PREFIX_LENGTH, PREFIX_RESERVE};
pub use message::Message;
pub use registry::MessageRegistry;
pub use severity::Severity;
pub use sink::{ConsoleDiag, ConsoleLog, Sink};
