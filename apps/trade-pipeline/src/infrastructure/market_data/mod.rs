//! Market Data Adapters
//!
//! Implementations of `MarketDataPort`.

pub mod static_feed;

pub use static_feed::StaticMarketData;
