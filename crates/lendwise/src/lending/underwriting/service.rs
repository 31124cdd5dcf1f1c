use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::domain::{ApplicationInput, LoanApplicationSubmission, SubmissionId};
use super::receipts::{SubmissionLog, SubmissionLogError, SubmissionReceipt};
use super::scoring::{self, RiskAssessment};
use super::validation::{IntakeError, ValidationError};

/// Intake pipeline behind the loan application form.
pub struct LoanApplicationService<L> {
    log: Arc<L>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("loan-{id:06}"))
}

impl<L> LoanApplicationService<L>
where
    L: SubmissionLog + 'static,
{
    pub fn new(log: Arc<L>) -> Self {
        Self { log }
    }

    /// Score a financial profile without submitting an application.
    pub fn assess(&self, input: &ApplicationInput) -> Result<RiskAssessment, SubmissionError> {
        let assessment = scoring::assess(input)?;
        debug!(
            score = assessment.score,
            recommendation = assessment.recommendation.label(),
            "risk assessment computed"
        );
        Ok(assessment)
    }

    /// Validate, score and record a submitted application.
    pub fn submit(
        &self,
        submission: LoanApplicationSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        submission.validate_identity()?;
        let assessment = self.assess(&submission.financials)?;

        let receipt = SubmissionReceipt {
            id: next_submission_id(),
            applicant: submission.full_name.trim().to_string(),
            email: submission.email.trim().to_string(),
            loan_purpose: submission.loan_purpose,
            employment_status: submission.employment_status,
            loan_amount: submission.financials.loan_amount,
            assessment,
            submitted_at: Utc::now(),
        };

        self.log.record(&receipt)?;
        Ok(receipt)
    }
}

/// Error raised by the loan application service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Log(#[from] SubmissionLogError),
}
