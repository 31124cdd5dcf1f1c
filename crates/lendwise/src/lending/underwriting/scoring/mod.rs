//! Applicant risk scoring.
//!
//! The composite score sums seven weighted contributions (credit, debt-to-income,
//! employment tenure, loan-to-income, bankruptcy, housing, existing loans) and maps
//! onto a three-way recommendation. [`compute_risk_assessment`] applies the formula
//! as-is; [`assess`] validates the input first and is what the service layer calls.

mod policy;
mod rules;

pub use policy::{Recommendation, APPROVE_THRESHOLD, REVIEW_THRESHOLD};

use super::domain::ApplicationInput;
use super::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Signals contributing to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    CreditScore,
    DebtToIncome,
    EmploymentTenure,
    LoanToIncome,
    BankruptcyHistory,
    HomeOwnership,
    ExistingLoans,
}

/// Single contribution to the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    pub points: f64,
    pub note: String,
}

/// Derived result shown to the loan officer after submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub score: i32,
    /// Debt-to-income percentage, one decimal.
    pub dti: f64,
    /// Loan-to-income percentage, one decimal.
    pub lti: f64,
    pub recommendation: Recommendation,
    pub components: Vec<ScoreComponent>,
}

impl RiskAssessment {
    pub fn dti_display(&self) -> String {
        format!("{:.1}%", self.dti)
    }

    pub fn lti_display(&self) -> String {
        format!("{:.1}%", self.lti)
    }

    pub fn component(&self, factor: RiskFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}

/// Apply the scoring formula without validating the input.
///
/// Credit scores below 300 produce a negative credit contribution, and a zero annual
/// income leaves `dti`/`lti` non-finite while the floored components drop to zero.
/// A negative half-point total rounds upward (-12.5 scores -12).
pub fn compute_risk_assessment(input: &ApplicationInput) -> RiskAssessment {
    let ratios = rules::affordability_ratios(input);
    let components = rules::score_components(input, &ratios);
    let total: f64 = components.iter().map(|component| component.points).sum();
    let score = rules::round_half_up(total) as i32;

    RiskAssessment {
        score,
        dti: rules::round_to_tenth(ratios.dti),
        lti: rules::round_to_tenth(ratios.lti),
        recommendation: Recommendation::from_score(score),
        components,
    }
}

/// Validate the input, then score it.
pub fn assess(input: &ApplicationInput) -> Result<RiskAssessment, ValidationError> {
    input.validate()?;
    Ok(compute_risk_assessment(input))
}
