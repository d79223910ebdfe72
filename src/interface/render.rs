use serde::Serialize;

use crate::error::Result;
use crate::models::{AdjustmentSummary, MacroPlan};
use crate::planner::constants::PERCENT_BAR_WIDTH;

/// A plan plus its context, for JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub weight_lbs: f64,
    pub plan: MacroPlan,
    pub adjustments: AdjustmentSummary,
}

/// Serialize a report as pretty-printed JSON.
pub fn render_json(report: &PlanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Percent of total calories, rounded, with a guarded divisor so the
/// all-zero plan renders 0% rather than NaN.
pub fn percent_of_total(calories: u32, total_calories: u32) -> u32 {
    (calories as f64 / total_calories.max(1) as f64 * 100.0).round() as u32
}

/// Display a plan as a table with a per-macro calorie-split bar, followed by
/// the adjustment echo when one applies.
pub fn display_plan(plan: &MacroPlan, summary: &AdjustmentSummary) {
    println!();
    println!("=== Daily Macro Plan ===");
    println!();
    println!("Total calories: {}", plan.total_calories);
    println!();

    let rows = [
        ("Protein", plan.protein_grams, plan.protein_calories),
        ("Fat", plan.fat_grams, plan.fat_calories),
        ("Carbs", plan.carb_grams, plan.carb_calories),
    ];

    for (name, grams, calories) in rows {
        let percent = percent_of_total(calories, plan.total_calories);
        let bar_len = (percent as usize * PERCENT_BAR_WIDTH) / 100;
        println!(
            "  {:<7} {:>4} g {:>5} cal {:>4}%  {}",
            name,
            grams,
            calories,
            percent,
            "#".repeat(bar_len)
        );
    }

    if !summary.is_zero() {
        println!();
        println!("Adjustments: {}", format_summary(summary));
    }

    println!();
}

/// Show how far carb grams moved relative to the baseline. Beyond any
/// explicit carb delta, carbs also shift when the calorie target or the
/// other macros change, and this line makes that movement visible.
pub fn display_carb_drift(baseline: &MacroPlan, adjusted: &MacroPlan) {
    let drift = adjusted.carb_grams as i64 - baseline.carb_grams as i64;
    if drift != 0 {
        println!("Carbs auto-adjusted by {} g.", signed(drift));
    }
}

/// Non-zero deltas with explicit signs, comma-joined.
fn format_summary(summary: &AdjustmentSummary) -> String {
    let mut parts = Vec::new();

    if summary.calorie_delta != 0 {
        parts.push(format!("{} cal", signed(summary.calorie_delta as i64)));
    }
    if summary.protein_delta != 0 {
        parts.push(format!(
            "protein {} g",
            signed(summary.protein_delta as i64)
        ));
    }
    if summary.fat_delta != 0 {
        parts.push(format!("fat {} g", signed(summary.fat_delta as i64)));
    }
    if summary.carb_delta != 0 {
        parts.push(format!("carbs {} g", signed(summary.carb_delta as i64)));
    }

    parts.join(", ")
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
