use serde::{Deserialize, Serialize};

/// A daily macronutrient plan.
///
/// All fields are non-negative by construction: every value the formulas
/// produce passes through rounding, so the plan stores whole calories and
/// whole grams. Carb calories carry the raw calorie remainder; `carb_grams`
/// is rounded from them and may not multiply back exactly, so for carbs the
/// calorie field is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPlan {
    pub total_calories: u32,

    pub protein_grams: u32,
    pub protein_calories: u32,

    pub fat_grams: u32,
    pub fat_calories: u32,

    pub carb_grams: u32,
    pub carb_calories: u32,
}

impl MacroPlan {
    /// The all-zero plan, used as the fallback for invalid weight input.
    pub const fn zero() -> Self {
        Self {
            total_calories: 0,
            protein_grams: 0,
            protein_calories: 0,
            fat_grams: 0,
            fat_calories: 0,
            carb_grams: 0,
            carb_calories: 0,
        }
    }

    /// Whether every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Sum of the three per-macro calorie fields.
    ///
    /// Equals `total_calories` for baseline and direct-macro plans; a
    /// ratio-preserving plan computes its total independently and may differ
    /// from this sum by up to one rounding unit per macro.
    #[inline]
    pub fn macro_calorie_sum(&self) -> u32 {
        self.protein_calories + self.fat_calories + self.carb_calories
    }
}
