use crate::models::MacroPlan;
use crate::planner::constants::*;

/// Compute the baseline macro plan for a body weight in pounds.
///
/// Fixed formula: 12 cal/lb total, 1 g/lb protein, 0.5 g/lb fat, carbs absorb
/// the remaining calorie budget. Grams are rounded first and their calorie
/// contribution derived from the rounded value, so reconstructing calories
/// from grams is authoritative. Rounding is half-away-from-zero at each step.
///
/// Non-finite or non-positive weight yields the all-zero plan; the function
/// never fails, so downstream rendering never sees a hole. If protein and fat
/// alone exceed the calorie budget, carbs floor at zero and the macro sum
/// exceeds `total_calories`; that is accepted at baseline time, not corrected
/// (it cannot happen for the fixed coefficients, but the clamp keeps the
/// arithmetic total).
pub fn compute_baseline(weight_lbs: f64) -> MacroPlan {
    if !weight_lbs.is_finite() || weight_lbs <= 0.0 {
        return MacroPlan::zero();
    }

    let total_calories = (weight_lbs * CALORIES_PER_LB).round() as u32;

    let protein_grams = (weight_lbs * PROTEIN_GRAMS_PER_LB).round() as u32;
    let protein_calories = grams_to_calories(protein_grams, PROTEIN_CAL_PER_GRAM);

    let fat_grams = (weight_lbs * FAT_GRAMS_PER_LB).round() as u32;
    let fat_calories = grams_to_calories(fat_grams, FAT_CAL_PER_GRAM);

    // Carbs take whatever budget remains, floored at zero.
    let carb_calories =
        (total_calories as i64 - protein_calories as i64 - fat_calories as i64).max(0) as u32;
    let carb_grams = (carb_calories as f64 / CARB_CAL_PER_GRAM as f64).round() as u32;

    MacroPlan {
        total_calories,
        protein_grams,
        protein_calories,
        fat_grams,
        fat_calories,
        carb_grams,
        carb_calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_at_220_lbs() {
        let plan = compute_baseline(220.0);
        assert_eq!(plan.total_calories, 2640);
        assert_eq!(plan.protein_grams, 220);
        assert_eq!(plan.protein_calories, 880);
        assert_eq!(plan.fat_grams, 110);
        assert_eq!(plan.fat_calories, 990);
        assert_eq!(plan.carb_calories, 770);
        assert_eq!(plan.carb_grams, 193);
    }

    #[test]
    fn test_zero_weight_yields_zero_plan() {
        assert!(compute_baseline(0.0).is_zero());
    }

    #[test]
    fn test_invalid_weight_yields_zero_plan() {
        assert!(compute_baseline(-50.0).is_zero());
        assert!(compute_baseline(f64::NAN).is_zero());
        assert!(compute_baseline(f64::INFINITY).is_zero());
        assert!(compute_baseline(f64::NEG_INFINITY).is_zero());
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 2.5 lb: protein rounds 2.5 -> 3, fat rounds 1.25 -> 1.
        let plan = compute_baseline(2.5);
        assert_eq!(plan.total_calories, 30);
        assert_eq!(plan.protein_grams, 3);
        assert_eq!(plan.protein_calories, 12);
        assert_eq!(plan.fat_grams, 1);
        assert_eq!(plan.fat_calories, 9);
        // 30 - 12 - 9 = 9 carb cal, 2.25 g -> 2.
        assert_eq!(plan.carb_calories, 9);
        assert_eq!(plan.carb_grams, 2);
    }

    #[test]
    fn test_calories_derived_from_rounded_grams() {
        // 185.4 lb: protein 185 g, fat 93 g (92.7 rounds up).
        let plan = compute_baseline(185.4);
        assert_eq!(plan.protein_grams, 185);
        assert_eq!(plan.protein_calories, 185 * 4);
        assert_eq!(plan.fat_grams, 93);
        assert_eq!(plan.fat_calories, 93 * 9);
    }

    #[test]
    fn test_energy_conservation() {
        for weight in [2.0, 55.5, 137.25, 220.0, 640.8, 1000.0] {
            let plan = compute_baseline(weight);
            assert_eq!(
                plan.total_calories,
                plan.macro_calorie_sum(),
                "energy not conserved at {} lbs",
                weight
            );
        }
    }

    #[test]
    fn test_absurd_weight_saturates_without_panic() {
        // The form collaborator caps weight at 1000 lbs, but the engine
        // must return a value for anything finite and positive.
        let plan = compute_baseline(1.0e12);
        assert_eq!(plan.total_calories, u32::MAX);
        assert_eq!(plan.protein_calories, u32::MAX);
        assert_eq!(plan.carb_calories, 0);
    }

    #[test]
    fn test_carb_floor_when_rounding_exceeds_budget() {
        // 1 lb: fat rounds 0.5 -> 1 g (9 cal), so protein + fat = 13 cal
        // against a 12 cal budget. Carbs floor at zero and the macro sum
        // overshoots the total; accepted, not corrected.
        let plan = compute_baseline(1.0);
        assert_eq!(plan.total_calories, 12);
        assert_eq!(plan.carb_calories, 0);
        assert_eq!(plan.carb_grams, 0);
        assert_eq!(plan.macro_calorie_sum(), 13);
    }
}
