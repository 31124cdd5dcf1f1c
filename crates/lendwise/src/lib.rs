//! LendWise: risk scoring and loan-intake services for a lending decision dashboard.

pub mod config;
pub mod error;
pub mod lending;
pub mod telemetry;

pub use lending::underwriting::{assess, compute_risk_assessment, ApplicationInput, RiskAssessment};
