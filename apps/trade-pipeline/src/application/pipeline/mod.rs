//! Trade Pipeline
//!
//! Fixed five-stage topology with two decision points:
//!
//! ```text
//! START -> Market -> Risk --pass?-----> Approval --approved?--> Exec -> Journal -> END
//!                          \--fail--> Journal     \--rejected--> Journal
//! ```
//!
//! [`Stage::next`] is the routing function; [`PipelineRunner`] walks it.

mod error;
mod runner;
mod stage;

pub use error::PipelineError;
pub use runner::{PipelineDefaults, PipelineRunner};
pub use stage::Stage;
