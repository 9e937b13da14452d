pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use config::GenerationConfig;
pub use error::{GenerationError, PlanError, Result};
pub use generation::GenerationClient;
pub use models::{GeneratedPlan, MacroResult, Profile, Submission};
pub use planner::compute_macros;
pub use state::{PlanSession, SessionState};
