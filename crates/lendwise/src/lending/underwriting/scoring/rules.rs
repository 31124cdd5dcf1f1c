use super::super::domain::{ApplicationInput, BankruptcyHistory, HomeOwnership};
use super::{RiskFactor, ScoreComponent};

pub(crate) const CREDIT_SCORE_FLOOR: f64 = 300.0;
pub(crate) const CREDIT_SCORE_SPAN: f64 = 550.0;

const CREDIT_WEIGHT: f64 = 30.0;
const DTI_WEIGHT: f64 = 20.0;
const TENURE_CAP: f64 = 15.0;
const LTI_WEIGHT: f64 = 15.0;
const CLEAN_BANKRUPTCY_POINTS: f64 = 10.0;
const OWNER_POINTS: f64 = 5.0;
const NON_OWNER_POINTS: f64 = 2.0;
const EXISTING_LOANS_WEIGHT: f64 = 5.0;
const EXISTING_LOAN_PENALTY: f64 = 1.5;

/// Debt and loan burden expressed as percentages of income.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AffordabilityRatios {
    pub dti: f64,
    pub lti: f64,
}

/// Zero income yields infinite (or NaN) ratios; callers wanting finite output validate first.
pub(crate) fn affordability_ratios(input: &ApplicationInput) -> AffordabilityRatios {
    let monthly_income = input.annual_income / 12.0;
    AffordabilityRatios {
        dti: (input.monthly_debt + input.monthly_rent) / monthly_income * 100.0,
        lti: input.loan_amount / input.annual_income * 100.0,
    }
}

pub(crate) fn score_components(
    input: &ApplicationInput,
    ratios: &AffordabilityRatios,
) -> Vec<ScoreComponent> {
    let credit = ((f64::from(input.credit_score) - CREDIT_SCORE_FLOOR) / CREDIT_SCORE_SPAN
        * CREDIT_WEIGHT)
        .min(CREDIT_WEIGHT);
    let dti = (DTI_WEIGHT - ratios.dti / 2.0).max(0.0);
    let tenure = (input.employment_years * 2.0).min(TENURE_CAP);
    let lti = (LTI_WEIGHT - ratios.lti / 10.0).max(0.0);
    let bankruptcy = match input.bankruptcy_history {
        BankruptcyHistory::No => CLEAN_BANKRUPTCY_POINTS,
        BankruptcyHistory::Yes => 0.0,
    };
    let housing = match input.home_ownership {
        HomeOwnership::Own => OWNER_POINTS,
        _ => NON_OWNER_POINTS,
    };
    let existing_loans =
        (EXISTING_LOANS_WEIGHT - input.existing_loans * EXISTING_LOAN_PENALTY).max(0.0);

    vec![
        ScoreComponent {
            factor: RiskFactor::CreditScore,
            points: credit,
            note: format!("credit score {}", input.credit_score),
        },
        ScoreComponent {
            factor: RiskFactor::DebtToIncome,
            points: dti,
            note: format!("debt-to-income {:.1}%", ratios.dti),
        },
        ScoreComponent {
            factor: RiskFactor::EmploymentTenure,
            points: tenure,
            note: format!("{} year(s) employed", input.employment_years),
        },
        ScoreComponent {
            factor: RiskFactor::LoanToIncome,
            points: lti,
            note: format!("loan-to-income {:.1}%", ratios.lti),
        },
        ScoreComponent {
            factor: RiskFactor::BankruptcyHistory,
            points: bankruptcy,
            note: format!("bankruptcy history: {}", input.bankruptcy_history.label()),
        },
        ScoreComponent {
            factor: RiskFactor::HomeOwnership,
            points: housing,
            note: format!("home ownership: {}", input.home_ownership.label()),
        },
        ScoreComponent {
            factor: RiskFactor::ExistingLoans,
            points: existing_loans,
            note: format!("{} existing loan(s)", input.existing_loans),
        },
    ]
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Halves round toward positive infinity, so -12.5 becomes -12 and 69.5 becomes 70.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
