use std::fmt;

use crate::error::{GenerationError, PlanError, Result};
use crate::generation::{GenerationClient, PROGRESS_MESSAGES, ProgressTicker};
use crate::models::{GeneratedPlan, MacroResult, Submission};
use crate::planner::compute_macros;

/// Where a planning session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    CollectingInput,
    ComputingMacros,
    AwaitingGeneration,
    PlanReady,
    GenerationFailed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::CollectingInput => "collecting input",
            SessionState::ComputingMacros => "computing macros",
            SessionState::AwaitingGeneration => "awaiting generation",
            SessionState::PlanReady => "plan ready",
            SessionState::GenerationFailed => "generation failed",
        };
        write!(f, "{label}")
    }
}

/// One user's pass through the questionnaire.
///
/// Owns every piece of state the flow produces. Macro targets and the plan
/// are stored as snapshots and only replaced wholesale by a new submission.
#[derive(Debug)]
pub struct PlanSession {
    state: SessionState,
    submission: Option<Submission>,
    macros: Option<MacroResult>,
    plan: Option<GeneratedPlan>,
    last_error: Option<GenerationError>,
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::CollectingInput,
            submission: None,
            macros: None,
            plan: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn macros(&self) -> Option<&MacroResult> {
        self.macros.as_ref()
    }

    pub fn plan(&self) -> Option<&GeneratedPlan> {
        self.plan.as_ref()
    }

    pub fn last_error(&self) -> Option<&GenerationError> {
        self.last_error.as_ref()
    }

    /// Accept a completed questionnaire and compute its macro targets.
    ///
    /// Restarts the flow from any settled state, discarding an earlier plan.
    /// Rejected while a generation request is outstanding.
    pub fn submit(&mut self, submission: Submission) -> Result<&MacroResult> {
        match self.state {
            SessionState::AwaitingGeneration => return Err(PlanError::GenerationInFlight),
            SessionState::ComputingMacros => {
                return Err(PlanError::InvalidTransition {
                    from: self.state,
                    action: "submit",
                });
            }
            _ => {}
        }

        self.plan = None;
        self.last_error = None;
        self.state = SessionState::ComputingMacros;

        let macros = compute_macros(&submission.profile);
        tracing::debug!(
            target_calories = macros.target_calories,
            warnings = macros.warnings.len(),
            "macros computed"
        );

        self.submission = Some(submission);
        self.state = SessionState::AwaitingGeneration;
        Ok(&*self.macros.insert(macros))
    }

    /// Record the outcome of the outstanding generation request.
    pub fn settle(
        &mut self,
        outcome: std::result::Result<GeneratedPlan, GenerationError>,
    ) -> Result<()> {
        if self.state != SessionState::AwaitingGeneration {
            return Err(PlanError::InvalidTransition {
                from: self.state,
                action: "settle a generation request",
            });
        }

        match outcome {
            Ok(plan) => {
                self.plan = Some(plan);
                self.state = SessionState::PlanReady;
            }
            Err(e) => {
                tracing::warn!(error = %e, "plan generation failed");
                self.last_error = Some(e);
                self.state = SessionState::GenerationFailed;
            }
        }
        Ok(())
    }

    /// Run the outstanding generation request to completion.
    ///
    /// `on_progress` receives rotating status messages until the request
    /// settles; the ticker is stopped on both success and failure.
    pub async fn generate<F>(
        &mut self,
        client: &GenerationClient,
        on_progress: F,
    ) -> Result<&GeneratedPlan>
    where
        F: FnMut(&'static str) + Send + 'static,
    {
        let (Some(submission), Some(macros)) = (&self.submission, &self.macros) else {
            return Err(PlanError::InvalidTransition {
                from: self.state,
                action: "generate a plan",
            });
        };
        if self.state != SessionState::AwaitingGeneration {
            return Err(PlanError::InvalidTransition {
                from: self.state,
                action: "generate a plan",
            });
        }

        let outcome = {
            let ticker = ProgressTicker::start(
                client.config().progress_interval,
                &PROGRESS_MESSAGES,
                on_progress,
            );
            let outcome = client.request_plan(submission, macros).await;
            ticker.stop();
            outcome
        };

        self.settle(outcome)?;
        match (&self.plan, &self.last_error) {
            (Some(plan), _) => Ok(plan),
            (None, Some(e)) => Err(PlanError::Generation(e.clone())),
            (None, None) => Err(PlanError::InvalidTransition {
                from: self.state,
                action: "read the generated plan",
            }),
        }
    }

    /// Return to the preferences step after a failed attempt.
    ///
    /// The previous submission is kept so the caller can edit and resubmit it.
    pub fn back_to_preferences(&mut self) -> Result<&Submission> {
        if self.state != SessionState::GenerationFailed {
            return Err(PlanError::InvalidTransition {
                from: self.state,
                action: "go back to preferences",
            });
        }

        self.state = SessionState::CollectingInput;
        self.submission.as_ref().ok_or(PlanError::InvalidTransition {
            from: SessionState::GenerationFailed,
            action: "go back to preferences",
        })
    }

    /// Drop everything and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
