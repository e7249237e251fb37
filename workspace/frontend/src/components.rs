pub mod analytics;
pub mod chart_mount;
pub mod dashboard;
pub mod layout;
pub mod prediction;
