//! Headless dashboard orchestrator: the context object the view layer
//! binds to, its persisted settings, and the poll schedule.

pub mod dashboard;
pub mod poll;
pub mod settings;

pub use dashboard::{Dashboard, StatusLine};
pub use poll::PollPlan;
pub use settings::DashboardSettings;
