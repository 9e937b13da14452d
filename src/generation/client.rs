//! HTTP side of plan generation.
//!
//! One POST per plan, no retries. Every failure collapses into a
//! [`GenerationError`]; nothing partial is returned.

use std::time::Instant;

use reqwest::Client;

use crate::config::GenerationConfig;
use crate::error::{GenerationError, PlanError, Result};
use crate::generation::request::{PlanRequest, build_request};
use crate::generation::response::{extract_text, parse_plan};
use crate::models::{GeneratedPlan, MacroResult, Submission};

pub struct GenerationClient {
    http: Client,
    config: GenerationConfig,
}

impl GenerationClient {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PlanError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Build the request for a submission using the configured model and budget.
    pub fn plan_request(&self, submission: &Submission, macros: &MacroResult) -> PlanRequest {
        build_request(
            submission,
            macros,
            &self.config.model,
            self.config.max_tokens,
        )
    }

    /// Send one request and return the concatenated response text.
    ///
    /// A non-success status fails without reading the body as a plan.
    pub async fn complete(&self, request: &PlanRequest) -> std::result::Result<String, GenerationError> {
        let started = Instant::now();
        tracing::info!(
            model = %request.model,
            max_tokens = request.max_tokens,
            prompt_bytes = request.instruction().len(),
            "requesting meal plan"
        );

        let mut builder = self
            .http
            .post(&self.config.endpoint)
            .header("anthropic-version", &self.config.api_version)
            .header("content-type", "application/json")
            .json(request);

        if let Some(key) = &self.config.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "generation request failed");
            GenerationError::Transport(describe_transport_error(&e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generation service returned an error status");
            return Err(GenerationError::Transport(format!("API error: {}", status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(describe_transport_error(&e)))?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_bytes = body.len(),
            "generation complete"
        );

        extract_text(&body)
    }

    /// Request and parse a 7-day plan for a submission.
    pub async fn request_plan(
        &self,
        submission: &Submission,
        macros: &MacroResult,
    ) -> std::result::Result<GeneratedPlan, GenerationError> {
        let request = self.plan_request(submission, macros);
        let text = self.complete(&request).await?;

        parse_plan(&text).inspect_err(|e| {
            tracing::warn!(error = %e, text_bytes = text.len(), "model output rejected");
            tracing::debug!(%text, "rejected model output");
        })
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "The request timed out".to_string()
    } else if err.is_connect() {
        format!("Could not connect to the generation service: {err}")
    } else {
        format!("Request failed: {err}")
    }
}
