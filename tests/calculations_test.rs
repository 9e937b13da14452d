#[macro_use]
extern crate assert_float_eq;

use macro_plan_rs::models::{ActivityLevel, Goal, Profile, Sex};
use macro_plan_rs::planner::{
    WARN_HIGH_BMI, WARN_LOW_CALORIES, WARN_UNDERWEIGHT, bmr, compute_macros, tdee,
};

fn make_profile(sex: Sex, weight: f64, height: f64, age: u32) -> Profile {
    Profile {
        sex,
        weight_kg: weight,
        height_cm: height,
        age,
        goal: Goal::Maintenance,
        activity_level: ActivityLevel::Moderate,
    }
}

#[test]
fn test_reference_bmr_and_tdee() {
    let profile = make_profile(Sex::Male, 75.0, 175.0, 28);

    let raw_bmr = bmr(profile.sex, profile.weight_kg, profile.height_cm, profile.age);
    assert_float_absolute_eq!(raw_bmr, 1708.75, 1e-9);
    assert_float_absolute_eq!(tdee(raw_bmr, ActivityLevel::Moderate), 2648.5625, 1e-6);

    let result = compute_macros(&profile);
    assert_eq!(result.bmr, 1709);
    assert_eq!(result.tdee, 2649);
}

#[test]
fn test_goal_adjustments() {
    let tdee_kcal = 2648.5625_f64;
    let base = make_profile(Sex::Male, 75.0, 175.0, 28);

    let expected = [
        (Goal::FatLoss, (tdee_kcal * 0.825).round() as u32),
        (Goal::Maintenance, tdee_kcal.round() as u32),
        (Goal::MuscleGain, (tdee_kcal * 1.125).round() as u32),
    ];

    for (goal, target) in expected {
        let result = compute_macros(&Profile { goal, ..base });
        assert_eq!(result.target_calories, target, "goal {goal:?}");
    }
}

#[test]
fn test_underweight_warning() {
    let result = compute_macros(&make_profile(Sex::Female, 40.0, 170.0, 25));

    assert_float_absolute_eq!(result.bmi, 13.8, 1e-9);
    assert!(result.warnings.iter().any(|w| w == WARN_UNDERWEIGHT));
    assert!(!result.warnings.iter().any(|w| w == WARN_HIGH_BMI));
}

#[test]
fn test_low_calorie_warning_alongside_others() {
    // Small, older, sedentary woman cutting: underweight and under 1200 kcal.
    let profile = Profile {
        sex: Sex::Female,
        weight_kg: 40.0,
        height_cm: 170.0,
        age: 60,
        goal: Goal::FatLoss,
        activity_level: ActivityLevel::Sedentary,
    };
    let result = compute_macros(&profile);

    assert!(result.target_calories < 1200);
    assert_eq!(result.warnings, vec![WARN_UNDERWEIGHT, WARN_LOW_CALORIES]);
}

#[test]
fn test_carbs_clamp_to_zero() {
    // Protein 66 g (264 kcal) + fat 24 g (216 kcal) overshoots the target.
    let profile = Profile {
        sex: Sex::Female,
        weight_kg: 30.0,
        height_cm: 100.0,
        age: 60,
        goal: Goal::FatLoss,
        activity_level: ActivityLevel::Sedentary,
    };
    let result = compute_macros(&profile);

    // BMR = 300 + 625 - 300 - 161 = 464; target = 464 * 1.2 * 0.825 = 459
    assert_eq!(result.target_calories, 459);
    assert!(result.protein_g * 4 + result.fat_g * 9 > result.target_calories);
    assert_eq!(result.carb_g, 0);
}

#[test]
fn test_all_valid_profiles_non_negative_and_balanced() {
    let sexes = [Sex::Male, Sex::Female];
    let weights = [30.0, 55.5, 80.0, 140.0, 300.0];
    let heights = [100.0, 150.0, 182.5, 250.0];
    let ages = [18, 35, 60];

    for sex in sexes {
        for weight in weights {
            for height in heights {
                for age in ages {
                    for goal in Goal::ALL {
                        for activity_level in ActivityLevel::ALL {
                            let profile = Profile {
                                sex,
                                weight_kg: weight,
                                height_cm: height,
                                age,
                                goal,
                                activity_level,
                            };
                            let r = compute_macros(&profile);

                            let macro_kcal = r.protein_g * 4 + r.fat_g * 9 + r.carb_g * 4;
                            if r.carb_g > 0 {
                                // Carb rounding moves the total by at most 2 kcal.
                                assert!(
                                    macro_kcal.abs_diff(r.target_calories) <= 2,
                                    "{profile:?} -> {r:?}"
                                );
                            } else {
                                assert!(macro_kcal + 2 >= r.target_calories, "{profile:?}");
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    let profile = make_profile(Sex::Male, 91.3, 187.0, 42);

    let first = compute_macros(&profile);
    let second = compute_macros(&profile);

    assert_eq!(first, second);
    assert_eq!(first.bmi.to_bits(), second.bmi.to_bits());
}
