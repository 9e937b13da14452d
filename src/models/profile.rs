use std::fmt;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;
pub const AGE_RANGE: RangeInclusive<u32> = 18..=60;
pub const MEALS_PER_DAY_RANGE: RangeInclusive<u8> = 3..=5;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::FatLoss, Goal::Maintenance, Goal::MuscleGain];

    /// Short description used by the goal picker.
    pub fn describe(self) -> &'static str {
        match self {
            Goal::FatLoss => "~17.5% calorie deficit to preserve muscle while losing fat",
            Goal::Maintenance => "Eat at TDEE to sustain current body composition",
            Goal::MuscleGain => "~12.5% calorie surplus to support muscle growth",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::FatLoss => write!(f, "fat loss"),
            Goal::Maintenance => write!(f, "maintenance"),
            Goal::MuscleGain => write!(f, "muscle gain"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::VeryActive,
        ActivityLevel::Athlete,
    ];

    pub fn describe(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise, desk job",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard training 6-7 days/week",
            ActivityLevel::Athlete => "Twice daily training, physical job",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "lightly active"),
            ActivityLevel::Moderate => write!(f, "moderately active"),
            ActivityLevel::VeryActive => write!(f, "very active"),
            ActivityLevel::Athlete => write!(f, "athlete"),
        }
    }
}

/// Body measurements and goal the macro engine works from.
///
/// The engine trusts these values; range checks happen at the input
/// boundary through [`Profile::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
}

impl Profile {
    /// Check every numeric field against its accepted range.
    pub fn validate(&self) -> Result<()> {
        check_weight(self.weight_kg)?;
        check_height(self.height_cm)?;
        check_age(self.age)?;
        Ok(())
    }
}

pub fn check_weight(weight_kg: f64) -> Result<()> {
    check_range("Weight", weight_kg, &WEIGHT_RANGE_KG, "30-300 kg")
}

pub fn check_height(height_cm: f64) -> Result<()> {
    check_range("Height", height_cm, &HEIGHT_RANGE_CM, "100-250 cm")
}

pub fn check_age(age: u32) -> Result<()> {
    check_range("Age", age, &AGE_RANGE, "18-60")
}

pub fn check_meals_per_day(meals: u8) -> Result<()> {
    check_range("Meals per day", meals, &MEALS_PER_DAY_RANGE, "3-5")
}

fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>, label: &str) -> Result<()>
where
    T: PartialOrd + fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PlanError::InputOutOfRange {
            field,
            value: value.to_string(),
            range: label.to_string(),
        })
    }
}

/// Who the plan is for. Only used to address the generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn validate(&self) -> Result<()> {
        check_name(&self.name)?;
        check_email(&self.email)
    }
}

pub fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PlanError::InvalidInput("Name is required".to_string()));
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(PlanError::InvalidInput("Valid email required".to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DietaryStyle {
    #[default]
    None,
    HighProtein,
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl DietaryStyle {
    pub const ALL: [DietaryStyle; 5] = [
        DietaryStyle::None,
        DietaryStyle::HighProtein,
        DietaryStyle::Vegetarian,
        DietaryStyle::Vegan,
        DietaryStyle::GlutenFree,
    ];
}

impl fmt::Display for DietaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietaryStyle::None => write!(f, "no preference"),
            DietaryStyle::HighProtein => write!(f, "high protein"),
            DietaryStyle::Vegetarian => write!(f, "vegetarian"),
            DietaryStyle::Vegan => write!(f, "vegan"),
            DietaryStyle::GlutenFree => write!(f, "gluten-free"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Budget,
    #[default]
    Moderate,
    Premium,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Budget, Budget::Moderate, Budget::Premium];

    /// Ingredient guidance embedded in the generation request.
    pub fn guidance(self) -> &'static str {
        match self {
            Budget::Budget => "use affordable staple foods",
            Budget::Moderate => "mix of everyday and quality ingredients",
            Budget::Premium => "high quality, premium ingredients",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Budget => write!(f, "budget"),
            Budget::Moderate => write!(f, "moderate"),
            Budget::Premium => write!(f, "premium"),
        }
    }
}

/// Meal-plan preferences collected on the last wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub meals_per_day: u8,
    pub dietary: DietaryStyle,
    /// Free-text allergies or foods to avoid. Empty means none.
    pub allergies: String,
    pub budget: Budget,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            meals_per_day: 3,
            dietary: DietaryStyle::None,
            allergies: String::new(),
            budget: Budget::Moderate,
        }
    }
}

impl Preferences {
    pub fn validate(&self) -> Result<()> {
        check_meals_per_day(self.meals_per_day)
    }

    /// Allergies with surrounding whitespace removed, or `None` when empty.
    pub fn avoid_list(&self) -> Option<&str> {
        let trimmed = self.allergies.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// The completed questionnaire handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub identity: Identity,
    pub profile: Profile,
    pub preferences: Preferences,
}

impl Submission {
    pub fn validate(&self) -> Result<()> {
        self.identity.validate()?;
        self.profile.validate()?;
        self.preferences.validate()
    }
}
