use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::lending::underwriting::domain::{
    ApplicationInput, BankruptcyHistory, EmploymentStatus, HomeOwnership,
    LoanApplicationSubmission, LoanPurpose,
};
use crate::lending::underwriting::receipts::{
    SubmissionLog, SubmissionLogError, SubmissionReceipt,
};
use crate::lending::underwriting::LoanApplicationService;

/// The worked example from the product brief: 750 credit, $90k income, $50k loan.
pub(super) fn reference_input() -> ApplicationInput {
    ApplicationInput {
        credit_score: 750,
        annual_income: 90_000.0,
        monthly_debt: 500.0,
        monthly_rent: 0.0,
        loan_amount: 50_000.0,
        employment_years: 5.0,
        existing_loans: 0.0,
        bankruptcy_history: BankruptcyHistory::No,
        home_ownership: HomeOwnership::Own,
    }
}

/// Profile scoring credit + 20 + 2 * years + 15 + 2, with bankruptcy and loan penalties maxed.
pub(super) fn stepped_input(credit_score: u16, employment_years: f64) -> ApplicationInput {
    ApplicationInput {
        credit_score,
        annual_income: 60_000.0,
        monthly_debt: 0.0,
        monthly_rent: 0.0,
        loan_amount: 0.0,
        employment_years,
        existing_loans: 4.0,
        bankruptcy_history: BankruptcyHistory::Yes,
        home_ownership: HomeOwnership::Rent,
    }
}

pub(super) fn submission() -> LoanApplicationSubmission {
    LoanApplicationSubmission {
        full_name: "  Ada Borrower ".to_string(),
        email: "ada@example.com".to_string(),
        loan_purpose: LoanPurpose::Home,
        employment_status: EmploymentStatus::FullTime,
        financials: reference_input(),
    }
}

#[derive(Default)]
pub(super) struct MemoryLog {
    pub(super) receipts: Mutex<Vec<SubmissionReceipt>>,
}

impl SubmissionLog for MemoryLog {
    fn record(&self, receipt: &SubmissionReceipt) -> Result<(), SubmissionLogError> {
        self.receipts
            .lock()
            .expect("log mutex poisoned")
            .push(receipt.clone());
        Ok(())
    }
}

pub(super) struct UnavailableLog;

impl SubmissionLog for UnavailableLog {
    fn record(&self, _receipt: &SubmissionReceipt) -> Result<(), SubmissionLogError> {
        Err(SubmissionLogError::Unavailable("disk full".to_string()))
    }
}

pub(super) fn build_service() -> (LoanApplicationService<MemoryLog>, Arc<MemoryLog>) {
    let log = Arc::new(MemoryLog::default());
    (LoanApplicationService::new(log.clone()), log)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
