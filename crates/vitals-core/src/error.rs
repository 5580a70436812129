use thiserror::Error;

use crate::entry::EntryType;

/// Failure to register an observation with the host.
///
/// Hosts raise this synchronously from registration. It is permanent for the
/// life of the page: a tracker that sees it is skipped and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserveError {
    #[error("entry type '{entry_type}' is not supported: {reason}")]
    Unsupported {
        entry_type: EntryType,
        reason: String,
    },

    #[error("performance API unavailable: {0}")]
    HostUnavailable(String),
}

impl ObserveError {
    pub fn unsupported(entry_type: EntryType, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            entry_type,
            reason: reason.into(),
        }
    }
}
