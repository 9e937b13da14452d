use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, Goal, Profile, Sex};

/// MacroPlan: calorie and macro targets plus an AI-generated 7-day meal plan.
#[derive(Parser, Debug)]
#[command(name = "macro_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log debug output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer the questionnaire and generate a 7-day meal plan.
    Plan(PlanArgs),

    /// Compute calorie and macro targets without generating a plan.
    Macros(ProfileArgs),

    /// Display a previously exported plan.
    Show {
        /// Path to a plan exported with `plan --output`.
        file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Write the generated plan to this JSON file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text-generation endpoint URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model identifier sent with the request.
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum tokens the model may generate.
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[arg(long, value_enum)]
    pub sex: Sex,

    /// Body weight in kg (30-300).
    #[arg(long)]
    pub weight: f64,

    /// Height in cm (100-250).
    #[arg(long)]
    pub height: f64,

    /// Age in years (18-60).
    #[arg(long)]
    pub age: u32,

    #[arg(long, value_enum, default_value = "maintenance")]
    pub goal: Goal,

    #[arg(long, value_enum, default_value = "moderate")]
    pub activity: ActivityLevel,
}

impl ProfileArgs {
    pub fn to_profile(&self) -> Profile {
        Profile {
            sex: self.sex,
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age,
            goal: self.goal,
            activity_level: self.activity,
        }
    }
}
