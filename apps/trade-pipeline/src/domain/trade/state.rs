//! Trade state aggregate.

use serde::{Deserialize, Serialize};

use super::{ExecutionReport, MarketSnapshot, Recommendation, Signal};
use crate::domain::risk_management::RiskReport;
use crate::domain::shared::{DomainError, Symbol};

const AGGREGATE: &str = "TradeState";

/// Record accumulated across one pipeline run.
///
/// Every field starts empty and is written at most once by the stage that
/// produces it. `symbol` and `signal` may be supplied by the caller.
/// Empty fields are omitted from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<Symbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signal: Option<Signal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    market_snapshot: Option<MarketSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recommendation: Option<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    risk_report: Option<RiskReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    approval: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    execution_report: Option<ExecutionReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    journal_id: Option<String>,
}

impl TradeState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol to trade.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the trade signal.
    #[must_use]
    pub fn with_signal(mut self, signal: Signal) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Symbol under consideration. An empty symbol counts as absent.
    #[must_use]
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref().filter(|symbol| !symbol.is_empty())
    }

    /// Caller-supplied signal.
    #[must_use]
    pub const fn signal(&self) -> Option<&Signal> {
        self.signal.as_ref()
    }

    /// Snapshot written by the Market stage.
    #[must_use]
    pub const fn market_snapshot(&self) -> Option<&MarketSnapshot> {
        self.market_snapshot.as_ref()
    }

    /// Recommendation written by the Risk stage.
    #[must_use]
    pub const fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Risk report written by the Risk stage.
    #[must_use]
    pub const fn risk_report(&self) -> Option<&RiskReport> {
        self.risk_report.as_ref()
    }

    /// Approval decision, if the Approval stage ran.
    #[must_use]
    pub const fn approval(&self) -> Option<bool> {
        self.approval
    }

    /// Approval decision, `false` when the Approval stage was skipped.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.approval.unwrap_or(false)
    }

    /// Whether the risk report exists and passed.
    #[must_use]
    pub fn risk_passed(&self) -> bool {
        self.risk_report.as_ref().is_some_and(|report| report.passed)
    }

    /// Broker report written by the Exec stage.
    #[must_use]
    pub const fn execution_report(&self) -> Option<&ExecutionReport> {
        self.execution_report.as_ref()
    }

    /// Journal identifier written by the Journal stage.
    #[must_use]
    pub fn journal_id(&self) -> Option<&str> {
        self.journal_id.as_deref()
    }

    /// Fill in the symbol when the caller did not supply one, or supplied
    /// one that was empty after trimming.
    ///
    /// Returns the symbol now held by the state, which is the caller's when
    /// a non-empty one was already present.
    pub fn fill_symbol(&mut self, fallback: Symbol) -> &Symbol {
        if self.symbol().is_none() {
            self.symbol = None;
        }
        self.symbol.get_or_insert(fallback)
    }

    /// Record the market snapshot.
    pub fn record_market_snapshot(&mut self, snapshot: MarketSnapshot) -> Result<(), DomainError> {
        set_once(&mut self.market_snapshot, snapshot, "market_snapshot")
    }

    /// Record the recommendation.
    pub fn record_recommendation(
        &mut self,
        recommendation: Recommendation,
    ) -> Result<(), DomainError> {
        set_once(&mut self.recommendation, recommendation, "recommendation")
    }

    /// Record the risk report.
    pub fn record_risk_report(&mut self, report: RiskReport) -> Result<(), DomainError> {
        set_once(&mut self.risk_report, report, "risk_report")
    }

    /// Record the approval decision.
    pub fn record_approval(&mut self, approved: bool) -> Result<(), DomainError> {
        set_once(&mut self.approval, approved, "approval")
    }

    /// Record the broker report.
    pub fn record_execution_report(&mut self, report: ExecutionReport) -> Result<(), DomainError> {
        set_once(&mut self.execution_report, report, "execution_report")
    }

    /// Record the journal identifier.
    pub fn record_journal_id(&mut self, journal_id: impl Into<String>) -> Result<(), DomainError> {
        set_once(&mut self.journal_id, journal_id.into(), "journal_id")
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, field: &str) -> Result<(), DomainError> {
    if slot.is_some() {
        return Err(DomainError::FieldAlreadySet {
            aggregate: AGGREGATE.to_string(),
            field: field.to_string(),
        });
    }
    *slot = Some(value);
    Ok(())
}
