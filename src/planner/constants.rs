use std::ops::RangeInclusive;

// ─────────────────────────────────────────────────────────────────────────────
// Energy densities (kcal per gram). Domain constants, never configurable.
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_CAL_PER_GRAM: u32 = 4;
pub const CARB_CAL_PER_GRAM: u32 = 4;
pub const FAT_CAL_PER_GRAM: u32 = 9;

/// Convert a gram count to calories at a fixed density.
///
/// The engine must not assume the caller's delta bounds, so a clamped gram
/// count can sit far above any sane intake; the product saturates instead of
/// wrapping.
#[inline]
pub fn grams_to_calories(grams: u32, cal_per_gram: u32) -> u32 {
    (grams as u64 * cal_per_gram as u64).min(u32::MAX as u64) as u32
}

// ─────────────────────────────────────────────────────────────────────────────
// Baseline formula coefficients (per pound of body weight)
// ─────────────────────────────────────────────────────────────────────────────

/// Daily calorie budget per pound.
pub const CALORIES_PER_LB: f64 = 12.0;

/// Grams of protein per pound.
pub const PROTEIN_GRAMS_PER_LB: f64 = 1.0;

/// Grams of fat per pound.
pub const FAT_GRAMS_PER_LB: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Caller-side input policy. The engine never checks these: weight validation
// belongs to the input form, and delta bounds to the adjustment controls.
// The engine only re-clamps grams at zero.
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound for accepted body weight (pounds).
pub const MAX_WEIGHT_LBS: f64 = 1000.0;

/// Calorie adjustment control range and step.
pub const CALORIE_DELTA_RANGE: RangeInclusive<i32> = -500..=500;
pub const CALORIE_DELTA_STEP: i32 = 10;

/// Gram adjustment control ranges.
pub const PROTEIN_DELTA_RANGE: RangeInclusive<i32> = -50..=50;
pub const FAT_DELTA_RANGE: RangeInclusive<i32> = -30..=30;
pub const CARB_DELTA_RANGE: RangeInclusive<i32> = -50..=50;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Width of the calorie-split bar at 100%.
pub const PERCENT_BAR_WIDTH: usize = 40;
