//! Portfolio views backing the dashboard and risk-analysis pages.
//!
//! The figures are fixed sample data; no loan book is loaded.

pub mod dashboard;
pub mod format;
pub mod risk;

pub use dashboard::{
    ApplicationStatus, DashboardSnapshot, MetricCard, PortfolioMetrics, RecentApplication,
    RecentApplicationView,
};
pub use risk::{
    DistributionSlice, LoanDetail, LoanRecord, RiskAnalysisView, RiskDistribution, RiskLevel,
};

use serde::Serialize;

/// Colour family used for badges and card icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Red,
}
