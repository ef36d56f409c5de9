//! Market Data Port (Driven Port)
//!
//! Interface for quote and last-trade lookups.

use crate::domain::shared::Symbol;
use crate::domain::trade::{LastTrade, Quote};

/// Market data error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarketDataError {
    /// Symbol not found.
    #[error("Symbol not found: {symbol}")]
    SymbolNotFound {
        /// The unknown symbol.
        symbol: String,
    },
}

/// Port for market data lookups.
pub trait MarketDataPort: Send + Sync {
    /// Get one quote per requested symbol, in request order.
    fn get_quotes(&self, symbols: &[Symbol]) -> Result<Vec<Quote>, MarketDataError>;

    /// Get the most recent trade for a symbol.
    fn get_last_trade(&self, symbol: &Symbol) -> Result<LastTrade, MarketDataError>;

    /// Get the quote for a single symbol.
    fn get_quote(&self, symbol: &Symbol) -> Result<Quote, MarketDataError> {
        self.get_quotes(std::slice::from_ref(symbol))?
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })
    }
}
