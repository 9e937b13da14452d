use std::fmt::Display;

use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::profile::{
    check_age, check_email, check_height, check_meals_per_day, check_name, check_weight,
};
use crate::models::{
    ActivityLevel, Budget, DietaryStyle, Goal, Identity, Preferences, Profile, Sex, Submission,
};
use crate::planner::activity_multiplier;

/// Turn a boundary check into a dialoguer validator message.
fn validator<T, F>(check: F) -> impl FnMut(&T) -> std::result::Result<(), String>
where
    F: Fn(&T) -> Result<()>,
{
    move |value: &T| check(value).map_err(|e| e.to_string())
}

/// Pick one of `options`, showing each with its description.
fn select_option<T>(prompt: &str, options: &[T], describe: fn(T) -> String, default: T) -> Result<T>
where
    T: Copy + PartialEq,
{
    let items: Vec<String> = options.iter().map(|o| describe(*o)).collect();
    let default_index = options.iter().position(|o| *o == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    options
        .get(selection)
        .copied()
        .ok_or_else(|| PlanError::InvalidInput(format!("No option at index {selection}")))
}

fn plain<T: Display>(value: T) -> String {
    value.to_string()
}

/// Gate: the user must confirm the disclaimer before continuing.
pub fn prompt_disclaimer() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("I confirm I am 18-60 years old and understand this is not medical advice")
        .default(false)
        .interact()?)
}

/// Step 1: name, email, sex, age, height and weight.
pub fn prompt_about_you() -> Result<(Identity, Sex, u32, f64, f64)> {
    let name: String = Input::new()
        .with_prompt("Full name")
        .validate_with(validator(|s: &String| check_name(s)))
        .interact_text()?;

    let email: String = Input::new()
        .with_prompt("Email address")
        .validate_with(validator(|s: &String| check_email(s.trim())))
        .interact_text()?;

    let sex = select_option("Sex", &[Sex::Male, Sex::Female], plain, Sex::Male)?;

    let age: u32 = Input::new()
        .with_prompt("Age")
        .validate_with(validator(|a: &u32| check_age(*a)))
        .interact_text()?;

    let height_cm: f64 = Input::new()
        .with_prompt("Height (cm)")
        .validate_with(validator(|h: &f64| check_height(*h)))
        .interact_text()?;

    let weight_kg: f64 = Input::new()
        .with_prompt("Weight (kg)")
        .validate_with(validator(|w: &f64| check_weight(*w)))
        .interact_text()?;

    let identity = Identity {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    };

    Ok((identity, sex, age, height_cm, weight_kg))
}

/// Step 2: primary goal.
pub fn prompt_goal() -> Result<Goal> {
    select_option(
        "What's your primary goal?",
        &Goal::ALL,
        |g| format!("{g} - {}", g.describe()),
        Goal::FatLoss,
    )
}

/// Step 3: activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    select_option(
        "Activity level",
        &ActivityLevel::ALL,
        |a| format!("{a} - {} (x{})", a.describe(), activity_multiplier(a)),
        ActivityLevel::Moderate,
    )
}

/// Step 4: dietary style, allergies, meals per day and budget.
///
/// `current` pre-selects earlier answers when returning after a failure.
pub fn prompt_preferences(current: &Preferences) -> Result<Preferences> {
    let dietary = select_option("Dietary style", &DietaryStyle::ALL, plain, current.dietary)?;

    let allergies: String = Input::new()
        .with_prompt("Allergies / foods to avoid (e.g. nuts, shellfish, lactose)")
        .with_initial_text(current.allergies.clone())
        .allow_empty(true)
        .interact_text()?;

    let meals_per_day: u8 = Input::new()
        .with_prompt("Meals per day (3-5)")
        .default(current.meals_per_day)
        .validate_with(validator(|m: &u8| check_meals_per_day(*m)))
        .interact_text()?;

    let budget = select_option(
        "Budget",
        &Budget::ALL,
        |b| format!("{b} - {}", b.guidance()),
        current.budget,
    )?;

    Ok(Preferences {
        meals_per_day,
        dietary,
        allergies: allergies.trim().to_string(),
        budget,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Run all four questionnaire steps.
///
/// Returns `None` when the disclaimer is declined.
pub fn collect_submission() -> Result<Option<Submission>> {
    if !prompt_disclaimer()? {
        return Ok(None);
    }

    println!();
    println!("Step 1 of 4 - Tell us about yourself");
    let (identity, sex, age, height_cm, weight_kg) = prompt_about_you()?;

    println!();
    println!("Step 2 of 4");
    let goal = prompt_goal()?;

    println!();
    println!("Step 3 of 4");
    let activity_level = prompt_activity()?;

    println!();
    println!("Step 4 of 4 - Preferences");
    let preferences = prompt_preferences(&Preferences::default())?;

    let submission = Submission {
        identity,
        profile: Profile {
            sex,
            weight_kg,
            height_cm,
            age,
            goal,
            activity_level,
        },
        preferences,
    };
    submission.validate()?;

    Ok(Some(submission))
}
