//! Domain Layer
//!
//! Business types with no infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`trade`]: the trade state threaded through the pipeline and the
//!   records each stage produces (snapshot, recommendation, execution report)
//! - [`risk_management`]: risk reports and the stop-required risk check
//! - [`shared`]: value objects and errors used by both

pub mod risk_management;
pub mod shared;
pub mod trade;
