mod plan;
mod summary;

pub use plan::MacroPlan;
pub use summary::AdjustmentSummary;
