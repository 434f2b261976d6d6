//! Immutable, sequence-numbered diagnostic records.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A single retained diagnostic message.
///
/// Messages are created by the emission path when a registry is active and
/// are immutable from then on; only the owning registry changes their
/// membership. The text is already truncated to
/// [`MAX_LOG_MSG_LENGTH`](crate::limits::MAX_LOG_MSG_LENGTH) and carries no
/// configured prefix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    severity: Severity,
    text: String,
    // Insertion order within the owning registry, never exposed.
    sequence: u64,
}

impl Message {
    pub(crate) fn new(severity: Severity, text: impl Into<String>, sequence: u64) -> Self {
        Self {
            severity,
            text: text.into(),
            sequence,
        }
    }

    /// The severity this message was emitted with.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The message body, without any configured prefix.
    pub fn text(&self) -> &str {
        &self.text
    }
}
