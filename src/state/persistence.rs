use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::generation::validate_plan;
use crate::models::GeneratedPlan;

/// Write a generated plan to a JSON file for the user to keep.
pub fn export_plan<P: AsRef<Path>>(path: P, plan: &GeneratedPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read back a plan written by [`export_plan`].
///
/// Applies the same structural checks as a freshly generated plan.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<GeneratedPlan> {
    let content = fs::read_to_string(path)?;
    let plan: GeneratedPlan = serde_json::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}
