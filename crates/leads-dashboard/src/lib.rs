// File: crates/leads-dashboard/src/lib.rs
// Summary: Weekly lead-count dashboard: fixed samples, the page view tree, and render configuration.

pub mod config;
pub mod data;
pub mod logging;
pub mod page;
#[cfg(feature = "desktop")]
pub mod ui;

pub use data::{LeadCountSample, WEEKLY_LEADS};
pub use page::{dashboard, DashboardPage, LineChartSpec, TITLE};

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_desktop() -> Result<(), &'static str> {
    Err("leads-dashboard built without `desktop` feature; enable features to run the desktop page")
}

#[cfg(feature = "desktop")]
pub fn run_desktop() -> Result<(), &'static str> {
    ui::run()
}
