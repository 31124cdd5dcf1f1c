use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{EmploymentStatus, LoanPurpose, SubmissionId};
use super::scoring::RiskAssessment;

/// Acknowledgement produced for every accepted loan application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: SubmissionId,
    pub applicant: String,
    pub email: String,
    pub loan_purpose: LoanPurpose,
    pub employment_status: EmploymentStatus,
    pub loan_amount: f64,
    pub assessment: RiskAssessment,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn summary_view(&self) -> SubmissionView {
        SubmissionView {
            id: self.id.clone(),
            applicant: self.applicant.clone(),
            loan_purpose: self.loan_purpose.label(),
            loan_amount: self.loan_amount,
            score: self.assessment.score,
            dti: self.assessment.dti_display(),
            lti: self.assessment.lti_display(),
            recommendation: self.assessment.recommendation.label(),
            rationale: self
                .assessment
                .recommendation
                .summary(self.assessment.score),
        }
    }
}

/// Display-ready projection of a receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: SubmissionId,
    pub applicant: String,
    pub loan_purpose: &'static str,
    pub loan_amount: f64,
    pub score: i32,
    pub dti: String,
    pub lti: String,
    pub recommendation: &'static str,
    pub rationale: String,
}

/// Destination for accepted submissions. Nothing is stored; implementations only record.
pub trait SubmissionLog: Send + Sync {
    fn record(&self, receipt: &SubmissionReceipt) -> Result<(), SubmissionLogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionLogError {
    #[error("submission log unavailable: {0}")]
    Unavailable(String),
}

/// Writes each submission as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSubmissionLog;

impl SubmissionLog for TracingSubmissionLog {
    fn record(&self, receipt: &SubmissionReceipt) -> Result<(), SubmissionLogError> {
        info!(
            submission_id = %receipt.id.0,
            applicant = %receipt.applicant,
            purpose = receipt.loan_purpose.label(),
            employment = receipt.employment_status.label(),
            loan_amount = receipt.loan_amount,
            score = receipt.assessment.score,
            recommendation = receipt.assessment.recommendation.label(),
            "loan application submitted"
        );
        Ok(())
    }
}
