use clap::Parser;

use macro_planner_rs::cli::{Cli, Command};
use macro_planner_rs::error::{MacroError, Result};
use macro_planner_rs::interface::{
    display_carb_drift, display_plan, prompt_calorie_delta, prompt_macro_deltas,
    prompt_menu_choice, prompt_weight, render_json, MenuChoice, PlanReport,
};
use macro_planner_rs::models::AdjustmentSummary;
use macro_planner_rs::planner::{adjust, compute_baseline, MAX_WEIGHT_LBS};
use macro_planner_rs::state::PlanSession;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Compute { weight, json } => cmd_compute(weight, json),
        Command::Adjust {
            weight,
            calories,
            protein,
            fat,
            carbs,
            json,
        } => cmd_adjust(weight, calories, protein, fat, carbs, json),
        Command::Interactive => cmd_interactive(),
    }
}

/// Weight validation for the non-interactive commands. The engine would
/// happily fall back to the all-zero plan; a typo deserves a message instead.
fn validate_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 || weight > MAX_WEIGHT_LBS {
        return Err(MacroError::InvalidInput(format!(
            "weight must be between 0 and {} lbs, got {}",
            MAX_WEIGHT_LBS, weight
        )));
    }
    Ok(())
}

/// Print the baseline plan for a weight.
fn cmd_compute(weight: f64, json: bool) -> Result<()> {
    validate_weight(weight)?;

    let plan = compute_baseline(weight);
    let summary = AdjustmentSummary::default();

    if json {
        let report = PlanReport {
            weight_lbs: weight,
            plan,
            adjustments: summary,
        };
        println!("{}", render_json(&report)?);
    } else {
        display_plan(&plan, &summary);
    }

    Ok(())
}

/// Compute a baseline and apply one adjustment pass.
fn cmd_adjust(
    weight: f64,
    calories: i32,
    protein: i32,
    fat: i32,
    carbs: i32,
    json: bool,
) -> Result<()> {
    validate_weight(weight)?;

    let baseline = compute_baseline(weight);
    let (plan, summary) = adjust(&baseline, calories, protein, fat, carbs);

    if json {
        let report = PlanReport {
            weight_lbs: weight,
            plan,
            adjustments: summary,
        };
        println!("{}", render_json(&report)?);
    } else {
        display_plan(&plan, &summary);
        display_carb_drift(&baseline, &plan);
    }

    Ok(())
}

/// Interactive session: one baseline, repeated adjustments against it.
fn cmd_interactive() -> Result<()> {
    let weight = prompt_weight()?;
    let mut session = PlanSession::new(weight);

    loop {
        let (plan, summary) = session.current_plan();
        display_plan(&plan, &summary);
        if !summary.is_zero() {
            display_carb_drift(session.baseline(), &plan);
        }

        match prompt_menu_choice()? {
            MenuChoice::AdjustCalories => {
                let delta = prompt_calorie_delta()?;
                session.set_calorie_delta(delta);
            }
            MenuChoice::AdjustMacros => {
                let (protein, fat, carbs) = prompt_macro_deltas()?;
                session.set_macro_deltas(protein, fat, carbs);
            }
            MenuChoice::Reset => {
                session.reset();
                println!("Adjustments reset.");
            }
            MenuChoice::NewWeight => {
                let new_weight = prompt_weight()?;
                session.set_weight(new_weight);
            }
            MenuChoice::Quit => break,
        }
    }

    Ok(())
}
