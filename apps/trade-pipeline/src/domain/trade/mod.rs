//! Trade Context
//!
//! The [`TradeState`] record threaded through one pipeline run, plus the
//! records each stage appends to it.

mod execution_report;
mod market_snapshot;
mod order;
mod recommendation;
mod signal;
mod state;

pub use execution_report::ExecutionReport;
pub use market_snapshot::{LastTrade, MarketSnapshot, Quote};
pub use order::{OrderSide, OrderStatus, OrderType};
pub use recommendation::Recommendation;
pub use signal::Signal;
pub use state::TradeState;
