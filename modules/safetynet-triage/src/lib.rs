pub mod action;
pub mod fixtures;
pub mod store;

pub use action::TriageAction;
pub use fixtures::seed_reports;
pub use store::TriageStore;
