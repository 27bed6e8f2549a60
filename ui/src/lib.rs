//! Shared UI crate for Oddsboard. The snapshot pipeline, chart engine and views live here;
//! the platform crates only launch them.

pub mod chart;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod tables;

pub use dashboard::Dashboard;
