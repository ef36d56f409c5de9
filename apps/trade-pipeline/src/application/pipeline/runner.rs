//! Pipeline runner.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::{PipelineError, Stage};
use crate::application::ports::{
    ApprovalPort, BrokerPort, JournalEntry, JournalPort, MarketDataPort, OrderRequest,
    RiskCheckPort,
};
use crate::domain::shared::Symbol;
use crate::domain::trade::{MarketSnapshot, OrderSide, Recommendation, Signal, TradeState};

/// Fallbacks for a caller that leaves out the symbol or the signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineDefaults {
    /// Symbol used when the state has none.
    pub symbol: Symbol,
    /// Signal used when the state has none.
    pub signal: Signal,
    /// When `false`, a missing symbol or signal fails the run instead.
    pub allow_defaults: bool,
}

impl PipelineDefaults {
    /// Literal fallback ticker.
    pub const FALLBACK_SYMBOL: &'static str = "AAPL";

    /// Defaults that fail the run rather than fill in missing inputs.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            allow_defaults: false,
            ..Self::default()
        }
    }

    fn fallback_symbol(&self) -> Result<Symbol, PipelineError> {
        if self.allow_defaults {
            Ok(self.symbol.clone())
        } else {
            Err(PipelineError::MissingField {
                stage: Stage::Market,
                field: "symbol",
            })
        }
    }

    fn fallback_signal(&self) -> Result<Signal, PipelineError> {
        if self.allow_defaults {
            Ok(self.signal.clone())
        } else {
            Err(PipelineError::MissingField {
                stage: Stage::Risk,
                field: "signal",
            })
        }
    }
}

impl Default for PipelineDefaults {
    fn default() -> Self {
        Self {
            symbol: Symbol::new(Self::FALLBACK_SYMBOL),
            signal: Signal::new(OrderSide::Buy, Decimal::ONE),
            allow_defaults: true,
        }
    }
}

/// Runs a [`TradeState`] through the fixed stage graph.
pub struct PipelineRunner<M, R, A, B, J>
where
    M: MarketDataPort,
    R: RiskCheckPort,
    A: ApprovalPort,
    B: BrokerPort,
    J: JournalPort,
{
    market_data: Arc<M>,
    risk: Arc<R>,
    approval: Arc<A>,
    broker: Arc<B>,
    journal: Arc<J>,
    defaults: PipelineDefaults,
}

impl<M, R, A, B, J> PipelineRunner<M, R, A, B, J>
where
    M: MarketDataPort,
    R: RiskCheckPort,
    A: ApprovalPort,
    B: BrokerPort,
    J: JournalPort,
{
    /// Create a new PipelineRunner.
    pub const fn new(
        market_data: Arc<M>,
        risk: Arc<R>,
        approval: Arc<A>,
        broker: Arc<B>,
        journal: Arc<J>,
        defaults: PipelineDefaults,
    ) -> Self {
        Self {
            market_data,
            risk,
            approval,
            broker,
            journal,
            defaults,
        }
    }

    /// Run one state from [`Stage::FIRST`] to the end of the graph.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure. Stages after the failing one do not
    /// run, so a failed run is never journaled.
    pub fn invoke(&self, initial: TradeState) -> Result<TradeState, PipelineError> {
        let mut state = initial;
        let mut next = Some(Stage::FIRST);

        while let Some(stage) = next {
            tracing::debug!(%stage, "Entering stage");
            self.run_stage(stage, &mut state)?;
            next = stage.next(&state);
        }

        Ok(state)
    }

    fn run_stage(&self, stage: Stage, state: &mut TradeState) -> Result<(), PipelineError> {
        match stage {
            Stage::Market => self.market(state),
            Stage::Risk => self.risk(state),
            Stage::Approval => self.approval(state),
            Stage::Exec => self.exec(state),
            Stage::Journal => self.journal(state),
        }
    }

    fn market(&self, state: &mut TradeState) -> Result<(), PipelineError> {
        let symbol = match state.symbol().cloned() {
            Some(symbol) => symbol,
            None => {
                let fallback = self.defaults.fallback_symbol()?;
                tracing::debug!(symbol = %fallback, "No symbol supplied, using default");
                state.fill_symbol(fallback).clone()
            }
        };

        let quote = self.market_data.get_quote(&symbol)?;
        let trade = self.market_data.get_last_trade(&symbol)?;

        tracing::info!(
            stage = %Stage::Market,
            %symbol,
            last = %trade.price,
            spread = %quote.spread(),
            "Market snapshot captured"
        );

        state
            .record_market_snapshot(MarketSnapshot { quote, trade })
            .map_err(PipelineError::invariant(Stage::Market))
    }

    fn risk(&self, state: &mut TradeState) -> Result<(), PipelineError> {
        let entry = state
            .market_snapshot()
            .map(MarketSnapshot::entry_price)
            .ok_or(PipelineError::MissingField {
                stage: Stage::Risk,
                field: "market_snapshot",
            })?;
        let symbol = state.symbol().cloned().ok_or(PipelineError::MissingField {
            stage: Stage::Risk,
            field: "symbol",
        })?;
        let signal = match state.signal().cloned() {
            Some(signal) => signal,
            None => self.defaults.fallback_signal()?,
        };

        let recommendation = Recommendation::from_signal(symbol, &signal, entry);
        let report = self.risk.check(&recommendation);

        if report.passed {
            tracing::info!(stage = %Stage::Risk, symbol = %recommendation.symbol, "Risk check passed");
        } else {
            tracing::warn!(
                stage = %Stage::Risk,
                symbol = %recommendation.symbol,
                reasons = ?report.reasons,
                "Risk check failed"
            );
        }

        state
            .record_recommendation(recommendation)
            .map_err(PipelineError::invariant(Stage::Risk))?;
        state
            .record_risk_report(report)
            .map_err(PipelineError::invariant(Stage::Risk))
    }

    fn approval(&self, state: &mut TradeState) -> Result<(), PipelineError> {
        let approved = self.approval.decide(state);
        tracing::info!(stage = %Stage::Approval, approved, "Approval recorded");

        state
            .record_approval(approved)
            .map_err(PipelineError::invariant(Stage::Approval))
    }

    fn exec(&self, state: &mut TradeState) -> Result<(), PipelineError> {
        if !state.is_approved() {
            tracing::debug!(stage = %Stage::Exec, "Not approved, no order placed");
            return Ok(());
        }

        let request = state
            .recommendation()
            .map(OrderRequest::from_recommendation)
            .ok_or(PipelineError::MissingField {
                stage: Stage::Exec,
                field: "recommendation",
            })?;
        let report = self.broker.place_order(request)?;

        tracing::info!(
            stage = %Stage::Exec,
            order_id = %report.id,
            status = %report.status,
            accepted = report.is_accepted(),
            "Order placed"
        );

        state
            .record_execution_report(report)
            .map_err(PipelineError::invariant(Stage::Exec))
    }

    fn journal(&self, state: &mut TradeState) -> Result<(), PipelineError> {
        let receipt = self.journal.append(&JournalEntry::new(state))?;

        tracing::info!(
            stage = %Stage::Journal,
            journal_id = %receipt.id,
            path = %receipt.path.display(),
            "Journaled: {}",
            receipt.id
        );

        state
            .record_journal_id(receipt.id)
            .map_err(PipelineError::invariant(Stage::Journal))
    }
}
