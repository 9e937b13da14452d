use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_plan_rs::cli::{Cli, Command, PlanArgs, ProfileArgs};
use macro_plan_rs::error::{PlanError, Result};
use macro_plan_rs::interface::{
    collect_submission, display_disclaimer, display_macros, display_meal_plan,
    prompt_preferences, prompt_yes_no,
};
use macro_plan_rs::planner::compute_macros;
use macro_plan_rs::state::{PlanSession, export_plan, load_plan};
use macro_plan_rs::{GenerationClient, GenerationConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(args).await,
        Command::Macros(args) => cmd_macros(&args),
        Command::Show { file } => cmd_show(&file),
    }
}

/// Walk through the questionnaire, compute targets and generate a plan.
async fn cmd_plan(args: PlanArgs) -> Result<()> {
    let config = GenerationConfig::from_env()?.with_overrides(
        args.endpoint,
        args.model,
        args.max_tokens,
    )?;
    let client = GenerationClient::new(config)?;

    display_disclaimer();
    let Some(mut submission) = collect_submission()? else {
        println!("You need to accept the disclaimer to continue.");
        return Ok(());
    };

    let mut session = PlanSession::new();

    loop {
        let macros = session.submit(submission)?;
        display_macros(macros);

        println!("This takes 20-40 seconds. Please don't close this window.");
        let result = session
            .generate(&client, |msg| println!("  {msg}"))
            .await;

        match result {
            Ok(plan) => {
                display_meal_plan(plan);
                if let Some(path) = &args.output {
                    export_plan(path, plan)?;
                    println!("Plan saved to {}", path.display());
                }
                return Ok(());
            }
            Err(PlanError::Generation(e)) => {
                println!();
                println!("Error: {}", e.user_message());

                if !prompt_yes_no("Adjust your preferences and try again?", true)? {
                    return Ok(());
                }

                let mut previous = session.back_to_preferences()?.clone();
                previous.preferences = prompt_preferences(&previous.preferences)?;
                submission = previous;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Compute targets for a profile given on the command line.
fn cmd_macros(args: &ProfileArgs) -> Result<()> {
    let profile = args.to_profile();
    profile.validate()?;

    let macros = compute_macros(&profile);
    display_macros(&macros);
    Ok(())
}

/// Render a previously exported plan.
fn cmd_show(file: &Path) -> Result<()> {
    if !file.exists() {
        eprintln!("Plan file not found: {}", file.display());
        return Ok(());
    }

    let plan = load_plan(file)?;
    display_meal_plan(&plan);
    Ok(())
}
