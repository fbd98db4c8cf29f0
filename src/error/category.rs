//! Error category classification.

use std::fmt;

/// Where a failure came from.
///
/// None of the categories is fatal; the category only decides how loudly the
/// degradation is logged and what a CLI user is told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Packaged resource missing or unreadable (table, strings, asset).
    Resource,

    /// A resource exists but its contents are malformed.
    Data,

    /// The external key-value store failed.
    Storage,
}

impl ErrorCategory {
    /// Short label for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Resource => "resource",
            ErrorCategory::Data => "data",
            ErrorCategory::Storage => "storage",
        }
    }

    /// Hint shown by the CLI.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Resource => {
                "Check that ATOMICX_EMOJI_ROOT points at the emoji resource directory."
            }
            ErrorCategory::Data => "The packaged file is corrupt; reinstall the resources.",
            ErrorCategory::Storage => {
                "Check permissions on the state file (ATOMICX_EMOJI_STORE)."
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
