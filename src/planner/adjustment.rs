use crate::models::{AdjustmentSummary, MacroPlan};
use crate::planner::constants::*;

/// Which of the two adjustment modes a delta set resolves to.
///
/// The two modes are mutually exclusive and resolved once, at the call
/// boundary: macro deltas win over a mixed set, and an all-zero set is a
/// no-op rather than a degenerate direct-macro pass (a zero-delta pass would
/// still re-round carb grams and disturb the carb field by a unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Rescale all macros proportionally to hit a new calorie target.
    RatioPreserving { calorie_delta: i32 },

    /// Offset individual macro grams and derive the total from them.
    DirectMacro {
        protein_delta: i32,
        fat_delta: i32,
        carb_delta: i32,
    },
}

impl Adjustment {
    /// Resolve a raw delta set into a mode, or `None` for the all-zero set.
    pub fn resolve(
        calorie_delta: i32,
        protein_delta: i32,
        fat_delta: i32,
        carb_delta: i32,
    ) -> Option<Self> {
        if protein_delta != 0 || fat_delta != 0 || carb_delta != 0 {
            Some(Self::DirectMacro {
                protein_delta,
                fat_delta,
                carb_delta,
            })
        } else if calorie_delta != 0 {
            Some(Self::RatioPreserving { calorie_delta })
        } else {
            None
        }
    }

    /// Apply this adjustment to a baseline, producing a fresh plan.
    pub fn apply(&self, baseline: &MacroPlan) -> MacroPlan {
        match *self {
            Self::RatioPreserving { calorie_delta } => ratio_preserving(baseline, calorie_delta),
            Self::DirectMacro {
                protein_delta,
                fat_delta,
                carb_delta,
            } => direct_macro(baseline, protein_delta, fat_delta, carb_delta),
        }
    }
}

/// Re-derive a plan from a baseline and a one-shot delta set.
///
/// Deltas are absolute offsets from the baseline, never cumulative history;
/// callers that adjust repeatedly pass the full current set against the same
/// retained baseline each time, which keeps rounding drift out. Returns the
/// new plan together with the delta echo for display.
///
/// Never fails: out-of-range deltas clamp grams at zero instead of erroring
/// (the controls are pre-bounded by the caller, but the engine does not
/// assume that).
pub fn adjust(
    baseline: &MacroPlan,
    calorie_delta: i32,
    protein_delta: i32,
    fat_delta: i32,
    carb_delta: i32,
) -> (MacroPlan, AdjustmentSummary) {
    match Adjustment::resolve(calorie_delta, protein_delta, fat_delta, carb_delta) {
        None => (*baseline, AdjustmentSummary::default()),
        Some(adjustment @ Adjustment::RatioPreserving { .. }) => {
            // Switching into calorie mode is a hard reset of the macro
            // deltas, never a merge.
            let summary = AdjustmentSummary {
                calorie_delta,
                ..Default::default()
            };
            (adjustment.apply(baseline), summary)
        }
        Some(adjustment @ Adjustment::DirectMacro { .. }) => {
            // The calorie delta is echoed for display but takes no part in
            // the arithmetic here.
            let summary = AdjustmentSummary {
                calorie_delta,
                protein_delta,
                fat_delta,
                carb_delta,
            };
            (adjustment.apply(baseline), summary)
        }
    }
}

/// New calorie target, baseline macro proportions.
fn ratio_preserving(baseline: &MacroPlan, calorie_delta: i32) -> MacroPlan {
    let total_calories = clamp_non_negative(baseline.total_calories, calorie_delta);

    // Guard divisor of 1 so the all-zero baseline yields zero ratios; any
    // calorie increase from it then lands entirely on carbs. Literal
    // behavior, kept.
    let base_total = baseline.total_calories.max(1) as f64;
    let protein_ratio = baseline.protein_calories as f64 / base_total;
    let fat_ratio = baseline.fat_calories as f64 / base_total;

    let protein_calories = (total_calories as f64 * protein_ratio).round() as u32;
    let protein_grams = (protein_calories as f64 / PROTEIN_CAL_PER_GRAM as f64).round() as u32;

    let fat_calories = (total_calories as f64 * fat_ratio).round() as u32;
    let fat_grams = (fat_calories as f64 / FAT_CAL_PER_GRAM as f64).round() as u32;

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

/// Per-macro gram offsets, total derived from the result.
fn direct_macro(
    baseline: &MacroPlan,
    protein_delta: i32,
    fat_delta: i32,
    carb_delta: i32,
) -> MacroPlan {
    let protein_grams = clamp_non_negative(baseline.protein_grams, protein_delta);
    let protein_calories = grams_to_calories(protein_grams, PROTEIN_CAL_PER_GRAM);

    let fat_grams = clamp_non_negative(baseline.fat_grams, fat_delta);
    let fat_calories = grams_to_calories(fat_grams, FAT_CAL_PER_GRAM);

    let carb_grams = clamp_non_negative(baseline.carb_grams, carb_delta);
    let carb_calories = grams_to_calories(carb_grams, CARB_CAL_PER_GRAM);

    // Derived, never independently clamped; only the per-macro clamps above
    // bound the result. The sum saturates like its terms.
    let total_calories = (protein_calories as u64 + fat_calories as u64 + carb_calories as u64)
        .min(u32::MAX as u64) as u32;

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

/// Apply a signed delta to an unsigned base, flooring at zero and
/// saturating at the representable ceiling.
#[inline]
fn clamp_non_negative(base: u32, delta: i32) -> u32 {
    (base as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32
}
