use std::sync::Arc;

use super::common::*;
use crate::lending::underwriting::scoring::Recommendation;
use crate::lending::underwriting::service::SubmissionError;
use crate::lending::underwriting::{LoanApplicationService, ValidationError};

#[test]
fn submit_scores_and_records_the_application() {
    let (service, log) = build_service();

    let receipt = service.submit(submission()).expect("submission accepted");

    assert!(receipt.id.0.starts_with("loan-"));
    assert_eq!(receipt.applicant, "Ada Borrower");
    assert_eq!(receipt.loan_amount, 50_000.0);
    assert_eq!(receipt.assessment.score, 81);
    assert_eq!(receipt.assessment.recommendation, Recommendation::Approve);

    let recorded = log.receipts.lock().expect("log mutex poisoned");
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].id, receipt.id);
}

#[test]
fn submissions_receive_distinct_ids() {
    let (service, _) = build_service();

    let first = service.submit(submission()).expect("first accepted");
    let second = service.submit(submission()).expect("second accepted");

    assert_ne!(first.id, second.id);
}

#[test]
fn invalid_financials_are_not_recorded() {
    let (service, log) = build_service();
    let mut submission = submission();
    submission.financials.annual_income = 0.0;

    let err = service.submit(submission).expect_err("zero income rejected");

    assert!(matches!(
        err,
        SubmissionError::Validation(ValidationError::NonPositiveIncome)
    ));
    assert!(log.receipts.lock().expect("log mutex poisoned").is_empty());
}

#[test]
fn identity_errors_short_circuit_scoring() {
    let (service, _) = build_service();
    let mut submission = submission();
    submission.email = "not-an-email".to_string();
    submission.financials.credit_score = 10;

    let err = service.submit(submission).expect_err("bad email rejected");

    assert!(matches!(err, SubmissionError::Intake(_)));
}

#[test]
fn log_failures_surface_to_the_caller() {
    let service = LoanApplicationService::new(Arc::new(UnavailableLog));

    let err = service.submit(submission()).expect_err("log unavailable");

    assert!(matches!(err, SubmissionError::Log(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn summary_view_formats_display_fields() {
    let (service, _) = build_service();
    let receipt = service.submit(submission()).expect("submission accepted");

    let view = receipt.summary_view();

    assert_eq!(view.loan_purpose, "Home Purchase");
    assert_eq!(view.dti, "6.7%");
    assert_eq!(view.lti, "55.6%");
    assert_eq!(view.recommendation, "Approve");
    assert!(view.rationale.contains("81"));
}
