use serde::{Deserialize, Serialize};

/// Financial profile entered on the loan application form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    pub credit_score: u16,
    pub annual_income: f64,
    pub monthly_debt: f64,
    pub monthly_rent: f64,
    pub loan_amount: f64,
    pub employment_years: f64,
    pub existing_loans: f64,
    pub bankruptcy_history: BankruptcyHistory,
    pub home_ownership: HomeOwnership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankruptcyHistory {
    Yes,
    No,
}

impl BankruptcyHistory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeOwnership {
    Own,
    Mortgage,
    Rent,
    Other,
}

impl HomeOwnership {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Mortgage => "mortgage",
            Self::Rent => "rent",
            Self::Other => "other",
        }
    }
}

/// Purpose options offered by the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanPurpose {
    Home,
    Business,
    Education,
    Personal,
}

impl LoanPurpose {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home Purchase",
            Self::Business => "Business",
            Self::Education => "Education",
            Self::Personal => "Personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmploymentStatus {
    FullTime,
    PartTime,
    SelfEmployed,
    Unemployed,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::SelfEmployed => "Self-employed",
            Self::Unemployed => "Unemployed",
        }
    }
}

/// Complete loan application as submitted from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationSubmission {
    pub full_name: String,
    pub email: String,
    pub loan_purpose: LoanPurpose,
    pub employment_status: EmploymentStatus,
    pub financials: ApplicationInput,
}

/// Identifier handed back for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);
