pub mod macros;
pub mod plan;
pub mod profile;

pub use macros::{MacroCalories, MacroResult};
pub use plan::{DayPlan, FoodLine, GeneratedPlan, GroceryCategory, GroceryItem, GroceryList, Meal};
pub use profile::{
    ActivityLevel, Budget, DietaryStyle, Goal, Identity, Preferences, Profile, Sex, Submission,
};
