//! Application Ports (Driven)
//!
//! Interfaces for the external services the pipeline calls. Every port is
//! synchronous: one run is a single blocking pass over the stages.

mod approval_port;
mod broker_port;
mod journal_port;
mod market_data_port;
mod risk_check_port;

pub use approval_port::{ApprovalPort, AutoApproval};
pub use broker_port::{BrokerError, BrokerPort, OrderRequest};
pub use journal_port::{JournalEntry, JournalError, JournalPort, JournalReceipt};
pub use market_data_port::{MarketDataError, MarketDataPort};
pub use risk_check_port::RiskCheckPort;
