use serde::{Deserialize, Serialize};

/// The last-applied adjustment deltas, echoed alongside a plan.
///
/// Display metadata only: a plan is always re-derived from its baseline plus
/// the current delta set, never from these echoes. In ratio-preserving mode
/// only `calorie_delta` is recorded; in direct-macro mode all four are kept
/// as supplied (the calorie delta does not participate in the arithmetic
/// there).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentSummary {
    #[serde(rename = "calorieAdjustment")]
    pub calorie_delta: i32,

    #[serde(rename = "proteinAdjustment")]
    pub protein_delta: i32,

    #[serde(rename = "fatAdjustment")]
    pub fat_delta: i32,

    #[serde(rename = "carbAdjustment")]
    pub carb_delta: i32,
}

impl AdjustmentSummary {
    /// Whether no delta is recorded.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
