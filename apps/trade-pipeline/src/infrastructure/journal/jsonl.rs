//! Append-only JSONL journal.
//!
//! One file per local calendar day, `<dir>/<YYYYMMDD>.jsonl`. Each call
//! opens the file in append mode, writes a single newline-terminated JSON
//! object and closes it again. There is no locking: one writer per directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::application::ports::{JournalEntry, JournalError, JournalPort, JournalReceipt};

const DAY_FORMAT: &str = "%Y%m%d";

/// Journal writing newline-delimited JSON under a directory.
#[derive(Debug, Clone)]
pub struct JsonlJournal {
    dir: PathBuf,
}

impl JsonlJournal {
    /// Open a journal rooted at `dir`, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| JournalError::Io {
            path: dir.clone(),
            source,
        })?;

        tracing::debug!(dir = %dir.display(), "Journal directory ready");
        Ok(Self { dir })
    }

    /// Directory holding the day files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for the day containing `at`.
    #[must_use]
    pub fn day_path(&self, at: DateTime<Local>) -> PathBuf {
        self.dir.join(format!("{}.jsonl", at.format(DAY_FORMAT)))
    }

    /// Append an entry as if written at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Serialization`] if the entry cannot be encoded
    /// and [`JournalError::Io`] if the file cannot be opened or written.
    pub fn append_at(
        &self,
        entry: &JournalEntry<'_>,
        at: DateTime<Local>,
    ) -> Result<JournalReceipt, JournalError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let path = self.day_path(at);
        let io_err = |source: std::io::Error| JournalError::Io {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;
        file.write_all(&line).map_err(io_err)?;

        Ok(JournalReceipt {
            id: format!("{}:{}", at.format(DAY_FORMAT), at.timestamp()),
            path,
        })
    }
}

impl JournalPort for JsonlJournal {
    fn append(&self, entry: &JournalEntry<'_>) -> Result<JournalReceipt, JournalError> {
        self.append_at(entry, Local::now())
    }
}
