//! Loan application intake and applicant risk scoring.

pub mod domain;
pub mod receipts;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationInput, BankruptcyHistory, EmploymentStatus, HomeOwnership, LoanApplicationSubmission,
    LoanPurpose, SubmissionId,
};
pub use receipts::{
    SubmissionLog, SubmissionLogError, SubmissionReceipt, SubmissionView, TracingSubmissionLog,
};
pub use router::underwriting_router;
pub use scoring::{
    assess, compute_risk_assessment, Recommendation, RiskAssessment, RiskFactor, ScoreComponent,
};
pub use service::{LoanApplicationService, SubmissionError};
pub use validation::{IntakeError, ValidationError};
