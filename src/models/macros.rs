use serde::{Deserialize, Serialize};

use crate::planner::constants::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Calorie and macro targets derived from a [`Profile`](crate::models::Profile).
///
/// Built once per submission by [`compute_macros`](crate::planner::compute_macros)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroResult {
    pub bmr: u32,
    pub tdee: u32,
    pub target_calories: u32,
    pub protein_g: u32,
    pub fat_g: u32,
    pub carb_g: u32,
    /// Body mass index rounded to one decimal.
    pub bmi: f64,
    pub warnings: Vec<String>,
}

/// Calories contributed by each macro at the target grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroCalories {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl MacroCalories {
    pub fn total(&self) -> u32 {
        self.protein + self.carbs + self.fat
    }
}

impl MacroResult {
    pub fn macro_calories(&self) -> MacroCalories {
        MacroCalories {
            protein: self.protein_g * KCAL_PER_G_PROTEIN,
            carbs: self.carb_g * KCAL_PER_G_CARB,
            fat: self.fat_g * KCAL_PER_G_FAT,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
