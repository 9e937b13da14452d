use crate::models::{ActivityLevel, Goal, MacroResult, Profile, Sex};
use crate::planner::constants::*;

/// Round to the nearest whole number, halves going up.
///
/// Inputs here are never negative, so rounding half away from zero is the
/// same as rounding half up. Negative inputs clamp to zero.
pub fn round_whole(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Basal metabolic rate (Mifflin-St Jeor), unrounded kcal.
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm - BMR_AGE_COEFF * age as f64
        + bmr_sex_constant(sex)
}

/// Total daily energy expenditure from an unrounded BMR.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity)
}

/// Goal-adjusted calorie target from an unrounded TDEE.
pub fn target_calories(tdee: f64, goal: Goal) -> f64 {
    tdee * goal_multiplier(goal)
}

pub fn protein_grams(weight_kg: f64, goal: Goal) -> u32 {
    round_whole(weight_kg * protein_per_kg(goal))
}

pub fn fat_grams(weight_kg: f64) -> u32 {
    round_whole(weight_kg * FAT_G_PER_KG)
}

/// Carbs fill whatever calories protein and fat leave over.
///
/// Floors at zero: high protein on a low target can consume the whole
/// budget, which yields 0 g carbs rather than a negative value.
pub fn carb_grams(target_calories: u32, protein_g: u32, fat_g: u32) -> u32 {
    let fixed = protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT;
    let carb_calories = target_calories.saturating_sub(fixed);
    round_whole(carb_calories as f64 / KCAL_PER_G_CARB as f64)
}

/// Body mass index, unrounded.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI rounded to one decimal for reporting.
pub fn round_bmi(bmi: f64) -> f64 {
    (bmi * 10.0).round() / 10.0
}

/// Boundary warnings, checked independently and in a fixed order.
pub fn collect_warnings(bmi: f64, target_calories: u32) -> Vec<String> {
    let mut warnings = Vec::new();

    if bmi < BMI_UNDERWEIGHT {
        warnings.push(WARN_UNDERWEIGHT.to_string());
    }
    if bmi > BMI_HIGH {
        warnings.push(WARN_HIGH_BMI.to_string());
    }
    if target_calories < MIN_SAFE_CALORIES {
        warnings.push(WARN_LOW_CALORIES.to_string());
    }
    if target_calories > MAX_SAFE_CALORIES {
        warnings.push(WARN_HIGH_CALORIES.to_string());
    }

    warnings
}

/// Derive calorie and macro targets for a profile.
///
/// BMR, TDEE and the calorie target are chained unrounded and each reported
/// figure is rounded on its own. Carbs are solved from the rounded target and
/// rounded protein/fat so the reported numbers add up.
pub fn compute_macros(profile: &Profile) -> MacroResult {
    let bmr_kcal = bmr(profile.sex, profile.weight_kg, profile.height_cm, profile.age);
    let tdee_kcal = tdee(bmr_kcal, profile.activity_level);
    let target = round_whole(target_calories(tdee_kcal, profile.goal));

    let protein_g = protein_grams(profile.weight_kg, profile.goal);
    let fat_g = fat_grams(profile.weight_kg);
    let carb_g = carb_grams(target, protein_g, fat_g);

    let raw_bmi = bmi(profile.weight_kg, profile.height_cm);

    MacroResult {
        bmr: round_whole(bmr_kcal),
        tdee: round_whole(tdee_kcal),
        target_calories: target,
        protein_g,
        fat_g,
        carb_g,
        bmi: round_bmi(raw_bmi),
        warnings: collect_warnings(raw_bmi, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(sex: Sex, weight: f64, height: f64, age: u32, goal: Goal) -> Profile {
        Profile {
            sex,
            weight_kg: weight,
            height_cm: height,
            age,
            goal,
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_bmr_male_and_female() {
        // 750 + 1093.75 - 140 + 5
        assert!((bmr(Sex::Male, 75.0, 175.0, 28) - 1708.75).abs() < 1e-9);
        // 600 + 1031.25 - 150 - 161
        assert!((bmr(Sex::Female, 60.0, 165.0, 30) - 1320.25).abs() < 1e-9);
    }

    #[test]
    fn test_activity_scaling() {
        let base = 1500.0;
        assert!((tdee(base, ActivityLevel::Sedentary) - 1800.0).abs() < 1e-9);
        assert!((tdee(base, ActivityLevel::Athlete) - 2850.0).abs() < 1e-9);
        assert!(tdee(base, ActivityLevel::Light) < tdee(base, ActivityLevel::Moderate));
        assert!(tdee(base, ActivityLevel::Moderate) < tdee(base, ActivityLevel::VeryActive));
    }

    #[test]
    fn test_round_whole_half_up() {
        assert_eq!(round_whole(1708.75), 1709);
        assert_eq!(round_whole(2648.5625), 2649);
        assert_eq!(round_whole(2.5), 3);
        assert_eq!(round_whole(2.4999), 2);
        assert_eq!(round_whole(-3.0), 0);
    }

    #[test]
    fn test_carbs_are_residual() {
        // 2000 - 150*4 - 60*9 = 860 kcal -> 215 g
        assert_eq!(carb_grams(2000, 150, 60), 215);
    }

    #[test]
    fn test_carbs_floor_at_zero() {
        // Protein and fat alone exceed the target.
        assert_eq!(carb_grams(1000, 200, 80), 0);
        assert_eq!(carb_grams(0, 0, 0), 0);
    }

    #[test]
    fn test_bmi_rounding() {
        let raw = bmi(75.0, 175.0);
        assert!((raw - 24.489_795_918).abs() < 1e-6);
        assert!((round_bmi(raw) - 24.5).abs() < 1e-9);
    }

    #[test]
    fn test_warnings_accumulate_in_order() {
        let warnings = collect_warnings(14.0, 1100);
        assert_eq!(warnings, vec![WARN_UNDERWEIGHT, WARN_LOW_CALORIES]);

        let warnings = collect_warnings(40.0, 4600);
        assert_eq!(warnings, vec![WARN_HIGH_BMI, WARN_HIGH_CALORIES]);

        assert!(collect_warnings(22.0, 2200).is_empty());
    }

    #[test]
    fn test_warning_thresholds_are_strict() {
        assert!(collect_warnings(BMI_UNDERWEIGHT, MIN_SAFE_CALORIES).is_empty());
        assert!(collect_warnings(BMI_HIGH, MAX_SAFE_CALORIES).is_empty());
    }

    #[test]
    fn test_compute_macros_reference_profile() {
        let result = compute_macros(&profile(Sex::Male, 75.0, 175.0, 28, Goal::Maintenance));

        assert_eq!(result.bmr, 1709);
        assert_eq!(result.tdee, 2649);
        assert_eq!(result.target_calories, 2649);
        assert_eq!(result.protein_g, 135); // 75 * 1.8
        assert_eq!(result.fat_g, 60); // 75 * 0.8
        // (2649 - 540 - 540) / 4 = 392.25
        assert_eq!(result.carb_g, 392);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_compute_macros_goal_adjustment() {
        let loss = compute_macros(&profile(Sex::Male, 75.0, 175.0, 28, Goal::FatLoss));
        let gain = compute_macros(&profile(Sex::Male, 75.0, 175.0, 28, Goal::MuscleGain));

        // 2648.5625 * 0.825 = 2185.06
        assert_eq!(loss.target_calories, 2185);
        assert_eq!(loss.protein_g, 165);
        // 2648.5625 * 1.125 = 2979.63
        assert_eq!(gain.target_calories, 2980);
        assert_eq!(gain.protein_g, 150);
    }
}
