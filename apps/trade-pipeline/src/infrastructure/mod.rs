//! Infrastructure Layer
//!
//! Adapters implementing the ports defined in the application layer:
//!
//! - `market_data/`: fixed-value quote and last-trade feed
//! - `broker/`: simulated broker that accepts every order
//! - `journal/`: append-only JSONL journal on the local filesystem
//!
//! The auto-approval adapter lives next to its port in
//! `application::ports::approval_port`.

pub mod broker;
pub mod journal;
pub mod market_data;

pub use broker::SimulatedBroker;
pub use journal::JsonlJournal;
pub use market_data::StaticMarketData;
