pub mod prompts;
pub mod render;

pub use prompts::{
    collect_submission, prompt_about_you, prompt_activity, prompt_disclaimer, prompt_goal,
    prompt_preferences, prompt_yes_no,
};
pub use render::{
    display_disclaimer, display_macros, display_meal_plan, format_day, format_grocery_list,
};
