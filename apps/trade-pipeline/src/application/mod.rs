//! Application Layer
//!
//! Orchestrates domain logic through the trade pipeline.
//! It defines:
//!
//! - **Ports**: Interfaces for the market data, risk, approval, broker and
//!   journal services a run depends on
//! - **Pipeline**: The fixed five-stage state machine and its runner

pub mod pipeline;
pub mod ports;

pub use pipeline::{PipelineDefaults, PipelineError, PipelineRunner, Stage};
pub use ports::*;
