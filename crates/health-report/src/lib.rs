//! Battery Health Reporting
//!
//! Turns a fade evaluation into a human-facing report: status label,
//! alerts for stressful usage, and plain-language recommendations.

pub mod report;
pub mod status;

pub use report::{
    AlertCategory, AlertSeverity, HealthAlert, HealthReport, HealthReportBuilder,
};
pub use status::BatteryStatus;
