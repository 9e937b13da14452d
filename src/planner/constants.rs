use crate::models::{ActivityLevel, Goal, Sex};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kg of body weight.
pub const BMR_WEIGHT_COEFF: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_COEFF: f64 = 6.25;

/// kcal subtracted per year of age.
pub const BMR_AGE_COEFF: f64 = 5.0;

pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Fat target in grams per kg of body weight, independent of goal.
pub const FAT_G_PER_KG: f64 = 0.8;

pub const KCAL_PER_G_PROTEIN: u32 = 4;
pub const KCAL_PER_G_CARB: u32 = 4;
pub const KCAL_PER_G_FAT: u32 = 9;

// ─────────────────────────────────────────────────────────────────────────────
// Warning thresholds
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_UNDERWEIGHT: f64 = 18.5;
pub const BMI_HIGH: f64 = 35.0;
pub const MIN_SAFE_CALORIES: u32 = 1200;
pub const MAX_SAFE_CALORIES: u32 = 4500;

pub const WARN_UNDERWEIGHT: &str = "BMI below 18.5 (underweight range)";
pub const WARN_HIGH_BMI: &str = "BMI above 35";
pub const WARN_LOW_CALORIES: &str = "Calorie target below 1200 kcal";
pub const WARN_HIGH_CALORIES: &str = "Calorie target above 4500 kcal";

/// Sex-specific constant term of the BMR equation.
pub fn bmr_sex_constant(sex: Sex) -> f64 {
    match sex {
        Sex::Male => BMR_MALE_CONSTANT,
        Sex::Female => BMR_FEMALE_CONSTANT,
    }
}

/// TDEE multiplier applied to BMR.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::Athlete => 1.9,
    }
}

/// Calorie adjustment applied to TDEE: ~17.5% deficit, none, ~12.5% surplus.
pub fn goal_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => 0.825,
        Goal::Maintenance => 1.0,
        Goal::MuscleGain => 1.125,
    }
}

/// Protein target in grams per kg of body weight.
pub fn protein_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => 2.2,
        Goal::Maintenance => 1.8,
        Goal::MuscleGain => 2.0,
    }
}
