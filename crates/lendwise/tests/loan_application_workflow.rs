//! End-to-end scenarios for scoring, intake, and the portfolio views.
//!
//! Everything here goes through the public crate surface: the service facade, the
//! HTTP router, and the view builders.

mod common {
    use std::sync::{Arc, Mutex};

    use lendwise::lending::underwriting::{
        ApplicationInput, BankruptcyHistory, EmploymentStatus, HomeOwnership,
        LoanApplicationService, LoanApplicationSubmission, LoanPurpose, SubmissionLog,
        SubmissionLogError, SubmissionReceipt,
    };

    pub(super) fn strong_profile() -> ApplicationInput {
        ApplicationInput {
            credit_score: 780,
            annual_income: 120_000.0,
            monthly_debt: 400.0,
            monthly_rent: 0.0,
            loan_amount: 30_000.0,
            employment_years: 9.0,
            existing_loans: 1.0,
            bankruptcy_history: BankruptcyHistory::No,
            home_ownership: HomeOwnership::Own,
        }
    }

    pub(super) fn borderline_profile() -> ApplicationInput {
        ApplicationInput {
            credit_score: 640,
            annual_income: 54_000.0,
            monthly_debt: 300.0,
            monthly_rent: 1_200.0,
            loan_amount: 40_000.0,
            employment_years: 5.0,
            existing_loans: 2.0,
            bankruptcy_history: BankruptcyHistory::No,
            home_ownership: HomeOwnership::Rent,
        }
    }

    pub(super) fn weak_profile() -> ApplicationInput {
        ApplicationInput {
            credit_score: 520,
            annual_income: 30_000.0,
            monthly_debt: 1_100.0,
            monthly_rent: 900.0,
            loan_amount: 60_000.0,
            employment_years: 0.5,
            existing_loans: 4.0,
            bankruptcy_history: BankruptcyHistory::Yes,
            home_ownership: HomeOwnership::Other,
        }
    }

    pub(super) fn submission_for(name: &str, financials: ApplicationInput) -> LoanApplicationSubmission {
        LoanApplicationSubmission {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            loan_purpose: LoanPurpose::Personal,
            employment_status: EmploymentStatus::FullTime,
            financials,
        }
    }

    #[derive(Default)]
    pub(super) struct RecordingLog {
        entries: Mutex<Vec<SubmissionReceipt>>,
    }

    impl RecordingLog {
        pub(super) fn entries(&self) -> Vec<SubmissionReceipt> {
            self.entries.lock().expect("log mutex poisoned").clone()
        }
    }

    impl SubmissionLog for RecordingLog {
        fn record(&self, receipt: &SubmissionReceipt) -> Result<(), SubmissionLogError> {
            self.entries
                .lock()
                .expect("log mutex poisoned")
                .push(receipt.clone());
            Ok(())
        }
    }

    pub(super) fn service() -> (Arc<LoanApplicationService<RecordingLog>>, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        (Arc::new(LoanApplicationService::new(log.clone())), log)
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::*;
use lendwise::lending::portfolio::{RiskDistribution, RiskLevel};
use lendwise::lending::underwriting::{underwriting_router, Recommendation};
use tower::ServiceExt;

#[test]
fn applicants_fall_into_all_three_recommendations() {
    let (service, log) = service();

    let receipts: Vec<_> = [
        ("Strong Applicant", strong_profile()),
        ("Borderline Applicant", borderline_profile()),
        ("Weak Applicant", weak_profile()),
    ]
    .into_iter()
    .map(|(name, profile)| {
        service
            .submit(submission_for(name, profile))
            .expect("submission accepted")
    })
    .collect();

    let recommendations: Vec<Recommendation> = receipts
        .iter()
        .map(|receipt| receipt.assessment.recommendation)
        .collect();
    assert_eq!(
        recommendations,
        vec![
            Recommendation::Approve,
            Recommendation::Review,
            Recommendation::Decline
        ]
    );
    assert_eq!(log.entries().len(), 3);

    let distribution = RiskDistribution::from_recommendations(recommendations);
    assert_eq!(distribution.total, 3);
    assert!(distribution
        .slices
        .iter()
        .all(|slice| slice.value == 1 && slice.share_pct == 33.3));
    assert_eq!(distribution.slices[2].level, RiskLevel::High);
}

#[tokio::test]
async fn submissions_over_http_are_logged_with_assessments() {
    let (service, log) = service();
    let router = underwriting_router(service);
    let payload = serde_json::to_vec(&submission_for("Strong Applicant", strong_profile()))
        .expect("submission serializes");

    let response = router
        .oneshot(
            Request::post("/api/v1/loans/applications")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].applicant, "Strong Applicant");
    assert_eq!(entries[0].email, "strong.applicant@example.com");
    assert_eq!(
        entries[0].assessment.recommendation,
        Recommendation::Approve
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_before_scoring() {
    let (service, log) = service();
    let router = underwriting_router(service);

    let response = router
        .oneshot(
            Request::post("/api/v1/loans/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"creditScore":"seven hundred"}"#))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert!(response.status().is_client_error());
    assert!(log.entries().is_empty());
}
