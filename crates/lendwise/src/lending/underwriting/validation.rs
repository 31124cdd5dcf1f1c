use super::domain::{ApplicationInput, LoanApplicationSubmission};

pub const MIN_CREDIT_SCORE: u16 = 300;
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Numeric input rejected before scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("credit score {found} outside 300-850")]
    CreditScoreOutOfRange { found: u16 },
    #[error("annual income must be greater than zero")]
    NonPositiveIncome,
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative (found {found})")]
    Negative { field: &'static str, found: f64 },
}

/// Applicant identity fields failing the form's required/email checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("full name is required")]
    MissingName,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ApplicationInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&self.credit_score) {
            return Err(ValidationError::CreditScoreOutOfRange {
                found: self.credit_score,
            });
        }

        if !self.annual_income.is_finite() || self.annual_income <= 0.0 {
            return Err(ValidationError::NonPositiveIncome);
        }

        let amounts = [
            ("monthlyDebt", self.monthly_debt),
            ("monthlyRent", self.monthly_rent),
            ("loanAmount", self.loan_amount),
            ("employmentYears", self.employment_years),
            ("existingLoans", self.existing_loans),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::Negative {
                    field,
                    found: value,
                });
            }
        }

        Ok(())
    }
}

impl LoanApplicationSubmission {
    pub fn validate_identity(&self) -> Result<(), IntakeError> {
        if self.full_name.trim().is_empty() {
            return Err(IntakeError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(IntakeError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
        }
        _ => false,
    }
}
