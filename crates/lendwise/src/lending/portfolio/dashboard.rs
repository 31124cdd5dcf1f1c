use chrono::NaiveDate;
use serde::Serialize;

use super::format::{compact_currency, currency, group_thousands};
use super::Tone;

/// Headline counters for the loan book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioMetrics {
    pub total_loans: u64,
    pub loan_volume: u64,
    pub active_borrowers: u64,
    pub at_risk_loans: u64,
}

impl PortfolioMetrics {
    pub const fn sample() -> Self {
        Self {
            total_loans: 1_284,
            loan_volume: 12_400_000,
            active_borrowers: 957,
            at_risk_loans: 24,
        }
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard {
                key: "total_loans",
                label: "Total Loans",
                value: self.total_loans,
                display: group_thousands(self.total_loans),
                tone: Tone::Blue,
            },
            MetricCard {
                key: "loan_volume",
                label: "Loan Volume",
                value: self.loan_volume,
                display: compact_currency(self.loan_volume),
                tone: Tone::Green,
            },
            MetricCard {
                key: "active_borrowers",
                label: "Active Borrowers",
                value: self.active_borrowers,
                display: group_thousands(self.active_borrowers),
                tone: Tone::Yellow,
            },
            MetricCard {
                key: "at_risk_loans",
                label: "At-Risk Loans",
                value: self.at_risk_loans,
                display: group_thousands(self.at_risk_loans),
                tone: Tone::Red,
            },
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u64,
    pub display: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Approved,
    Pending,
    Declined,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Declined => "Declined",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Approved => Tone::Green,
            Self::Pending => Tone::Yellow,
            Self::Declined => Tone::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentApplication {
    pub applicant: String,
    pub loan_amount: u64,
    pub status: ApplicationStatus,
    pub submitted_on: NaiveDate,
}

impl RecentApplication {
    fn view(&self) -> RecentApplicationView {
        RecentApplicationView {
            applicant: self.applicant.clone(),
            loan_amount: self.loan_amount,
            loan_amount_display: currency(self.loan_amount),
            status: self.status,
            status_label: self.status.label(),
            status_tone: self.status.tone(),
            submitted_on: self.submitted_on,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentApplicationView {
    pub applicant: String,
    pub loan_amount: u64,
    pub loan_amount_display: String,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub status_tone: Tone,
    pub submitted_on: NaiveDate,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: Vec<MetricCard>,
    pub recent_applications: Vec<RecentApplicationView>,
}

impl DashboardSnapshot {
    /// Most recent applications are listed first.
    pub fn build(metrics: &PortfolioMetrics, applications: &[RecentApplication]) -> Self {
        let mut recent: Vec<&RecentApplication> = applications.iter().collect();
        recent.sort_by(|a, b| b.submitted_on.cmp(&a.submitted_on));

        Self {
            metrics: metrics.cards(),
            recent_applications: recent.into_iter().map(RecentApplication::view).collect(),
        }
    }

    pub fn sample() -> Self {
        Self::build(&PortfolioMetrics::sample(), &sample_recent_applications())
    }
}

const fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

// Evaluated at compile time, so a bad date fails the build.
const JOHN_DOE_SUBMITTED: NaiveDate = sample_date(2023, 3, 15);
const JANE_SMITH_SUBMITTED: NaiveDate = sample_date(2023, 3, 14);

fn sample_recent_applications() -> Vec<RecentApplication> {
    vec![
        RecentApplication {
            applicant: "John Doe".to_string(),
            loan_amount: 50_000,
            status: ApplicationStatus::Approved,
            submitted_on: JOHN_DOE_SUBMITTED,
        },
        RecentApplication {
            applicant: "Jane Smith".to_string(),
            loan_amount: 75_000,
            status: ApplicationStatus::Pending,
            submitted_on: JANE_SMITH_SUBMITTED,
        },
    ]
}
