use std::ops::RangeInclusive;

use dialoguer::{Input, Select};

use crate::error::Result;
use crate::planner::constants::*;

/// Prompt for body weight in pounds, looping until the input is a finite
/// number in (0, 1000].
///
/// All user-facing weight validation lives here; the engine itself only has
/// its all-zero fallback and never reports input errors.
pub fn prompt_weight() -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt("Body weight (lbs)")
            .interact_text()?;

        match input.trim().parse::<f64>() {
            Ok(weight) if weight.is_finite() && weight > 0.0 && weight <= MAX_WEIGHT_LBS => {
                return Ok(weight);
            }
            Ok(_) => {
                println!("Weight must be between 0 and {} lbs.", MAX_WEIGHT_LBS);
            }
            Err(_) => {
                println!("Please enter a number.");
            }
        }
    }
}

/// Prompt for a calorie adjustment in [-500, 500], in steps of 10.
pub fn prompt_calorie_delta() -> Result<i32> {
    prompt_bounded_delta(
        &format!("Calorie adjustment (step {})", CALORIE_DELTA_STEP),
        CALORIE_DELTA_RANGE,
        CALORIE_DELTA_STEP,
    )
}

/// Prompt for the three macro gram adjustments.
pub fn prompt_macro_deltas() -> Result<(i32, i32, i32)> {
    let protein = prompt_bounded_delta("Protein adjustment (g)", PROTEIN_DELTA_RANGE, 1)?;
    let fat = prompt_bounded_delta("Fat adjustment (g)", FAT_DELTA_RANGE, 1)?;
    let carb = prompt_bounded_delta("Carb adjustment (g)", CARB_DELTA_RANGE, 1)?;
    Ok((protein, fat, carb))
}

/// Prompt for a signed delta within a control range, looping until valid.
///
/// These bounds mirror the adjustment controls; the engine re-clamps grams
/// at zero regardless, so they are a courtesy, not a safety net.
fn prompt_bounded_delta(label: &str, range: RangeInclusive<i32>, step: i32) -> Result<i32> {
    loop {
        let input: String = Input::new()
            .with_prompt(label)
            .default("0".to_string())
            .interact_text()?;

        match parse_bounded_delta(&input, &range, step) {
            Ok(delta) => return Ok(delta),
            Err(message) => println!("{}", message),
        }
    }
}

/// Validate one line of delta input against a control's range and step.
fn parse_bounded_delta(
    input: &str,
    range: &RangeInclusive<i32>,
    step: i32,
) -> std::result::Result<i32, String> {
    let delta: i32 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a whole number.".to_string())?;

    if !range.contains(&delta) {
        return Err(format!(
            "Value must be between {} and {}.",
            range.start(),
            range.end()
        ));
    }

    if delta % step != 0 {
        return Err(format!("Value must be a multiple of {}.", step));
    }

    Ok(delta)
}

/// Action chosen from the interactive session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AdjustCalories,
    AdjustMacros,
    Reset,
    NewWeight,
    Quit,
}

/// Prompt for the next session action.
pub fn prompt_menu_choice() -> Result<MenuChoice> {
    let options = [
        "Adjust calories (keeps macro ratios)",
        "Adjust macros (recomputes total)",
        "Reset adjustments",
        "New weight",
        "Quit",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => MenuChoice::AdjustCalories,
        1 => MenuChoice::AdjustMacros,
        2 => MenuChoice::Reset,
        3 => MenuChoice::NewWeight,
        _ => MenuChoice::Quit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calorie_input_respects_step() {
        assert_eq!(parse_bounded_delta("250", &CALORIE_DELTA_RANGE, 10), Ok(250));
        assert_eq!(
            parse_bounded_delta("-500", &CALORIE_DELTA_RANGE, 10),
            Ok(-500)
        );
        assert!(parse_bounded_delta("7", &CALORIE_DELTA_RANGE, 10).is_err());
        assert!(parse_bounded_delta("-255", &CALORIE_DELTA_RANGE, 10).is_err());
    }

    #[test]
    fn test_macro_input_allows_any_step() {
        assert_eq!(parse_bounded_delta("7", &PROTEIN_DELTA_RANGE, 1), Ok(7));
        assert_eq!(parse_bounded_delta("-29", &FAT_DELTA_RANGE, 1), Ok(-29));
    }

    #[test]
    fn test_input_outside_range_rejected() {
        assert!(parse_bounded_delta("600", &CALORIE_DELTA_RANGE, 10).is_err());
        assert!(parse_bounded_delta("51", &PROTEIN_DELTA_RANGE, 1).is_err());
        assert!(parse_bounded_delta("-31", &FAT_DELTA_RANGE, 1).is_err());
    }

    #[test]
    fn test_non_numeric_input_rejected() {
        assert!(parse_bounded_delta("ten", &CALORIE_DELTA_RANGE, 10).is_err());
        assert!(parse_bounded_delta("", &CALORIE_DELTA_RANGE, 10).is_err());
        assert!(parse_bounded_delta("1.5", &PROTEIN_DELTA_RANGE, 1).is_err());
    }
}
