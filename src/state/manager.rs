use crate::models::{AdjustmentSummary, MacroPlan};
use crate::planner::{adjustment, baseline};

/// An in-memory planning session: a retained baseline plus the current
/// delta set.
///
/// The baseline is computed once per weight submission and kept unchanged;
/// every displayed plan is re-derived from it with the full current delta
/// set, so adjustments never compound on an already-adjusted plan and
/// repeated rounding cannot drift. Nothing here touches disk.
pub struct PlanSession {
    weight_lbs: f64,
    baseline: MacroPlan,
    deltas: AdjustmentSummary,
}

impl PlanSession {
    /// Start a session from a body weight.
    pub fn new(weight_lbs: f64) -> Self {
        Self {
            weight_lbs,
            baseline: baseline::compute_baseline(weight_lbs),
            deltas: AdjustmentSummary::default(),
        }
    }

    /// Submit a new weight: replaces the baseline and zeroes every delta.
    pub fn set_weight(&mut self, weight_lbs: f64) {
        self.weight_lbs = weight_lbs;
        self.baseline = baseline::compute_baseline(weight_lbs);
        self.deltas = AdjustmentSummary::default();
    }

    /// Set the calorie delta.
    ///
    /// Touching the calorie control forcibly zeroes the three macro deltas
    /// (control-level policy; the engine would let macro deltas win
    /// otherwise). The reverse direction is not enforced.
    pub fn set_calorie_delta(&mut self, calorie_delta: i32) {
        self.deltas = AdjustmentSummary {
            calorie_delta,
            ..Default::default()
        };
    }

    /// Set the three macro gram deltas, leaving the calorie delta as-is.
    pub fn set_macro_deltas(&mut self, protein_delta: i32, fat_delta: i32, carb_delta: i32) {
        self.deltas.protein_delta = protein_delta;
        self.deltas.fat_delta = fat_delta;
        self.deltas.carb_delta = carb_delta;
    }

    /// Zero every delta, keeping the baseline.
    pub fn reset(&mut self) {
        self.deltas = AdjustmentSummary::default();
    }

    pub fn weight_lbs(&self) -> f64 {
        self.weight_lbs
    }

    pub fn baseline(&self) -> &MacroPlan {
        &self.baseline
    }

    pub fn current_deltas(&self) -> AdjustmentSummary {
        self.deltas
    }

    /// The plan for the current delta set, re-derived from the baseline.
    pub fn current_plan(&self) -> (MacroPlan, AdjustmentSummary) {
        adjustment::adjust(
            &self.baseline,
            self.deltas.calorie_delta,
            self.deltas.protein_delta,
            self.deltas.fat_delta,
            self.deltas.carb_delta,
        )
    }
}
