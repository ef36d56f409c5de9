//! Pipeline errors.

use super::Stage;
use crate::application::ports::{BrokerError, JournalError, MarketDataError};
use crate::domain::shared::DomainError;

/// Error that aborts a pipeline run.
///
/// There is no partial result: the state is dropped with the error.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A stage ran without a field it depends on.
    #[error("{stage} stage requires `{field}`, which is not set")]
    MissingField {
        /// Stage that failed.
        stage: Stage,
        /// Field that was missing.
        field: &'static str,
    },

    /// A stage tried to break the append-only trade state.
    #[error("{stage} stage: {source}")]
    Invariant {
        /// Stage that failed.
        stage: Stage,
        /// Underlying domain error.
        source: DomainError,
    },

    /// Market data lookup failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Order placement failed.
    #[error(transparent)]
    Broker(#[from] BrokerError),

    /// Journal append failed.
    #[error(transparent)]
    Journal(#[from] JournalError),
}

impl PipelineError {
    /// Adapter for `map_err` on trade state writes made by `stage`.
    pub(crate) fn invariant(stage: Stage) -> impl FnOnce(DomainError) -> Self {
        move |source| Self::Invariant { stage, source }
    }
}
