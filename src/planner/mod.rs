pub mod calculations;
pub mod constants;

pub use calculations::{
    bmi, bmr, carb_grams, collect_warnings, compute_macros, fat_grams, protein_grams,
    round_bmi, round_whole, target_calories, tdee,
};
pub use constants::*;
