//! Timestamp value object for market data records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp carried by quotes and trades.
///
/// Serializes as RFC 3339 with a `Z` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const EPOCH: Self = Self(DateTime::UNIX_EPOCH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_epoch_serializes_with_z_suffix() {
        let json = serde_json::to_string(&Timestamp::EPOCH).unwrap();
        assert_eq!(json, "\"1970-01-01T00:00:00Z\"");
    }

    #[test]
    fn timestamp_deserializes_rfc3339() {
        let ts: Timestamp = serde_json::from_str("\"1970-01-01T00:00:00Z\"").unwrap();
        assert_eq!(ts, Timestamp::EPOCH);

        let later: Timestamp = serde_json::from_str("\"2026-01-19T12:00:00+01:00\"").unwrap();
        assert!(later > Timestamp::EPOCH);
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>("\"not-a-date\"").is_err());
    }
}
