use serde::Deserialize;

use crate::error::GenerationError;
use crate::models::GeneratedPlan;

/// Number of days a plan must contain.
pub const PLAN_DAYS: usize = 7;

/// Response envelope of the text-generation service.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub content_type: String,
    pub text: Option<String>,
}

impl CompletionResponse {
    /// All text blocks joined in order; non-text blocks contribute nothing.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| block.text.as_deref())
            .collect()
    }
}

/// Decode the raw response body and return its concatenated text.
pub fn extract_text(body: &str) -> Result<String, GenerationError> {
    let envelope: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Format(format!("unexpected response body: {e}")))?;
    Ok(envelope.joined_text())
}

/// Remove every ```json and ``` marker and trim the result.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse model output into a plan and check its structure.
pub fn parse_plan(text: &str) -> Result<GeneratedPlan, GenerationError> {
    let clean = strip_code_fences(text);
    if clean.is_empty() {
        return Err(GenerationError::Format("response contained no text".to_string()));
    }

    let plan: GeneratedPlan =
        serde_json::from_str(&clean).map_err(|e| GenerationError::Format(e.to_string()))?;

    validate_plan(&plan)?;
    Ok(plan)
}

/// Structural checks only; nutritional accuracy is not verified.
pub fn validate_plan(plan: &GeneratedPlan) -> Result<(), GenerationError> {
    if plan.days.len() != PLAN_DAYS {
        return Err(GenerationError::Format(format!(
            "expected {PLAN_DAYS} days, got {}",
            plan.days.len()
        )));
    }

    if let Some(day) = plan.days.iter().find(|d| d.meals.is_empty()) {
        return Err(GenerationError::Format(format!(
            "day {} ({}) has no meals",
            day.day, day.day_name
        )));
    }

    Ok(())
}
