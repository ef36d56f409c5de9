// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Trade Pipeline - Decision Workflow Library
//!
//! Runs one trade idea through a fixed pipeline: market snapshot, risk
//! check, approval, order placement and journaling.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business types
//!   - `trade`: `TradeState`, signal, market snapshot, recommendation, execution report
//!   - `risk_management`: risk report and the stop-required risk check
//!   - `shared`: `Symbol`, `Timestamp`, `DomainError`
//!
//! - **Application**: Orchestration
//!   - `ports`: Interfaces for external services (`MarketDataPort`, `BrokerPort`, `JournalPort`, ...)
//!   - `pipeline`: `Stage` routing and `PipelineRunner`
//!
//! - **Infrastructure**: Adapters
//!   - `market_data`: fixed-value feed
//!   - `broker`: simulated broker
//!   - `journal`: daily JSONL journal
//!
//! - **Config**: YAML + environment configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business types with no external dependencies.
pub mod domain;

/// Application layer - Ports and the pipeline.
pub mod application;

/// Infrastructure layer - Port adapters.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::risk_management::{RiskLimits, RiskReport, RiskValidationService};
pub use domain::shared::{DomainError, Symbol, Timestamp};
pub use domain::trade::{
    ExecutionReport, LastTrade, MarketSnapshot, OrderSide, OrderStatus, OrderType, Quote,
    Recommendation, Signal, TradeState,
};

// Application re-exports
pub use application::{
    ApprovalPort, AutoApproval, BrokerPort, JournalPort, MarketDataPort, PipelineDefaults,
    PipelineError, PipelineRunner, RiskCheckPort, Stage,
};

// Infrastructure re-exports
pub use infrastructure::{JsonlJournal, SimulatedBroker, StaticMarketData};

/// Runner wired to the built-in stub adapters and the JSONL journal.
pub type StubPipelineRunner = PipelineRunner<
    StaticMarketData,
    RiskValidationService,
    AutoApproval,
    SimulatedBroker,
    JsonlJournal,
>;
