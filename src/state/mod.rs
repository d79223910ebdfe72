mod manager;

pub use manager::PlanSession;
