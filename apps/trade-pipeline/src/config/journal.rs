//! Journal configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Journal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Directory holding the daily `.jsonl` files.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

pub(crate) fn default_dir() -> PathBuf {
    PathBuf::from("journal")
}
