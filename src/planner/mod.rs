pub mod adjustment;
pub mod baseline;
pub mod constants;

pub use adjustment::{adjust, Adjustment};
pub use baseline::compute_baseline;
pub use constants::*;
