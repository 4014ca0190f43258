pub mod analytics;
pub mod core;
pub mod grading;
pub mod roster;
pub mod theme;
