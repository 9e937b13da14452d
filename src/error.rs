use thiserror::Error;

use crate::state::SessionState;

/// Failure of a single meal-plan generation attempt.
///
/// Both kinds end the attempt without producing a plan; the user resubmits
/// from the preferences step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Network failure, timeout, or a non-success HTTP status.
    #[error("{0}")]
    Transport(String),

    /// The response text was not valid JSON or did not match the plan shape.
    #[error("Could not read the generated plan: {0}")]
    Format(String),
}

impl GenerationError {
    /// Single message shown to the user for either failure kind.
    pub fn user_message(&self) -> String {
        format!("Failed to generate plan ({self}). Please try again.")
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationError::Transport(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, GenerationError::Format(_))
    }
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("{field} must be {range} (got {value})")]
    InputOutOfRange {
        field: &'static str,
        value: String,
        range: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("A meal plan is already being generated")]
    GenerationInFlight,

    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: SessionState,
        action: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
