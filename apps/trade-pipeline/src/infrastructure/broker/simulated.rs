//! Simulated broker.

use crate::application::ports::{BrokerError, BrokerPort, OrderRequest};
use crate::domain::trade::{ExecutionReport, OrderStatus};

/// Broker that accepts every order under a fixed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedBroker {
    order_id: String,
}

impl SimulatedBroker {
    /// Identifier reported for every simulated order.
    pub const ORDER_ID: &'static str = "SIM-ORDER-1";

    /// Create a simulated broker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order_id: Self::ORDER_ID.to_string(),
        }
    }
}

impl Default for SimulatedBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl BrokerPort for SimulatedBroker {
    fn place_order(&self, request: OrderRequest) -> Result<ExecutionReport, BrokerError> {
        tracing::debug!(
            symbol = %request.symbol,
            side = %request.side,
            qty = %request.quantity,
            "Simulating order placement"
        );

        Ok(ExecutionReport {
            id: self.order_id.clone(),
            symbol: request.symbol,
            side: request.side,
            quantity: request.quantity,
            status: OrderStatus::Accepted,
        })
    }
}
