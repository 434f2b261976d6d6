//! Message severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a log or diagnostic message.
///
/// Ordered from least severe (`Info`) to most severe (`Error`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
/// Severity governs which sink handles a live emission ([`Info`](Severity::Info)
/// goes to the log channel, everything else to the diagnostic channel) and
/// which label a registry drain renders.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// Informational output about normal operation.
    Info,
    /// A potential problem that does not abort the operation reporting it.
    Warning,
    /// A definite problem; the reporting operation usually fails.
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// Returns the fixed label a registry drain prepends to a stored message.
    ///
    /// Drains use this label instead of the configured diagnostic prefix,
    /// which applies to live emission only.
    pub fn registry_label(self) -> &'static str {
        match self {
            Severity::Info => "Info: ",
            Severity::Warning => "Warning: ",
            Severity::Error => "Error: ",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn is_error() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Warning.is_error());
        assert!(!Severity::Info.is_error());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    #[test]
    fn registry_labels() {
        assert_eq!(Severity::Info.registry_label(), "Info: ");
        assert_eq!(Severity::Warning.registry_label(), "Warning: ");
        assert_eq!(Severity::Error.registry_label(), "Error: ");
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Warning);
    }
}
