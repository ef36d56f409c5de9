//! Journal Adapters
//!
//! Implementations of `JournalPort`.

pub mod jsonl;

pub use jsonl::JsonlJournal;
