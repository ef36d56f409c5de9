//! Pipeline defaults configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::PipelineDefaults;
use crate::domain::shared::Symbol;
use crate::domain::trade::{OrderSide, Signal};

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ticker used when a run supplies no symbol.
    #[serde(default = "default_symbol")]
    pub default_symbol: String,
    /// Whether missing symbol/signal inputs fall back to the defaults.
    #[serde(default = "default_allow_defaults")]
    pub allow_defaults: bool,
    /// Signal used when a run supplies none.
    #[serde(default = "default_signal")]
    pub default_signal: Signal,
}

impl PipelineConfig {
    /// Runner defaults built from this section.
    #[must_use]
    pub fn defaults(&self) -> PipelineDefaults {
        PipelineDefaults {
            symbol: Symbol::new(self.default_symbol.as_str()),
            signal: self.default_signal.clone(),
            allow_defaults: self.allow_defaults,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_symbol: default_symbol(),
            allow_defaults: default_allow_defaults(),
            default_signal: default_signal(),
        }
    }
}

pub(crate) fn default_symbol() -> String {
    PipelineDefaults::FALLBACK_SYMBOL.to_string()
}

pub(crate) const fn default_allow_defaults() -> bool {
    true
}

pub(crate) const fn default_signal() -> Signal {
    Signal::new(OrderSide::Buy, Decimal::ONE)
}
