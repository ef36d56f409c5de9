//! Fixed-value market data feed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::application::ports::{MarketDataError, MarketDataPort};
use crate::domain::shared::{Symbol, Timestamp};
use crate::domain::trade::{LastTrade, Quote};

/// Market data feed that answers every symbol with the same synthetic book.
///
/// Never fails and never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMarketData {
    bid: Decimal,
    ask: Decimal,
    bid_size: u64,
    ask_size: u64,
    last_price: Decimal,
    last_size: u64,
    ts: Timestamp,
}

impl StaticMarketData {
    /// Create a feed with the stock synthetic values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bid: dec!(100.00),
            ask: dec!(100.05),
            bid_size: 10,
            ask_size: 12,
            last_price: dec!(100.02),
            last_size: 1,
            ts: Timestamp::EPOCH,
        }
    }

    fn quote_for(&self, symbol: &Symbol) -> Quote {
        Quote {
            symbol: symbol.clone(),
            bid: self.bid,
            ask: self.ask,
            bid_size: self.bid_size,
            ask_size: self.ask_size,
            ts: self.ts,
        }
    }
}

impl Default for StaticMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataPort for StaticMarketData {
    fn get_quotes(&self, symbols: &[Symbol]) -> Result<Vec<Quote>, MarketDataError> {
        Ok(symbols.iter().map(|symbol| self.quote_for(symbol)).collect())
    }

    fn get_last_trade(&self, symbol: &Symbol) -> Result<LastTrade, MarketDataError> {
        Ok(LastTrade {
            symbol: symbol.clone(),
            price: self.last_price,
            size: self.last_size,
            ts: self.ts,
        })
    }
}
