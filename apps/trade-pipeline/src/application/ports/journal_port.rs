//! Journal Port (Driven Port)
//!
//! Interface for the append-only trade journal.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::trade::TradeState;

/// One journal record: `{"state": <trade state>}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JournalEntry<'a> {
    /// State at the time it was journaled.
    pub state: &'a TradeState,
}

impl<'a> JournalEntry<'a> {
    /// Wrap a state for journaling.
    #[must_use]
    pub const fn new(state: &'a TradeState) -> Self {
        Self { state }
    }
}

/// Where an entry landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalReceipt {
    /// Entry identifier, `<YYYYMMDD>:<unix-seconds>`.
    pub id: String,
    /// File the entry was appended to.
    pub path: PathBuf,
}

/// Journal error.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// Filesystem error.
    #[error("Journal I/O error at '{}': {source}", .path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Entry could not be encoded.
    #[error("Journal serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Port for appending journal entries.
pub trait JournalPort: Send + Sync {
    /// Append one entry and report where it was written.
    fn append(&self, entry: &JournalEntry<'_>) -> Result<JournalReceipt, JournalError>;
}
