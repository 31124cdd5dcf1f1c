use clap::Args;
use lendwise::error::AppError;
use lendwise::lending::navigation::{NavigationTab, NavigationView};
use lendwise::lending::portfolio::{DashboardSnapshot, RiskAnalysisView, RiskDistribution};
use lendwise::lending::underwriting::{
    assess, ApplicationInput, BankruptcyHistory, EmploymentStatus, HomeOwnership,
    LoanApplicationService, LoanApplicationSubmission, LoanPurpose, RiskAssessment,
    SubmissionError, TracingSubmissionLog,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Bureau credit score (300-850)
    #[arg(long)]
    pub(crate) credit_score: u16,
    /// Gross annual income
    #[arg(long)]
    pub(crate) annual_income: f64,
    /// Monthly debt payments
    #[arg(long, default_value_t = 0.0)]
    pub(crate) monthly_debt: f64,
    /// Monthly rent
    #[arg(long, default_value_t = 0.0)]
    pub(crate) monthly_rent: f64,
    /// Requested loan amount
    #[arg(long, default_value_t = 0.0)]
    pub(crate) loan_amount: f64,
    /// Years with the current employer
    #[arg(long, default_value_t = 0.0)]
    pub(crate) employment_years: f64,
    /// Number of loans already outstanding
    #[arg(long, default_value_t = 0.0)]
    pub(crate) existing_loans: f64,
    /// Prior bankruptcy (yes/no)
    #[arg(long, value_parser = crate::infra::parse_bankruptcy, default_value = "no")]
    pub(crate) bankruptcy: BankruptcyHistory,
    /// Housing situation (own, mortgage, rent, other)
    #[arg(long, value_parser = crate::infra::parse_home_ownership, default_value = "rent")]
    pub(crate) home_ownership: HomeOwnership,
    /// Print the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    pub(crate) fn to_input(&self) -> ApplicationInput {
        ApplicationInput {
            credit_score: self.credit_score,
            annual_income: self.annual_income,
            monthly_debt: self.monthly_debt,
            monthly_rent: self.monthly_rent,
            loan_amount: self.loan_amount,
            employment_years: self.employment_years,
            existing_loans: self.existing_loans,
            bankruptcy_history: self.bankruptcy,
            home_ownership: self.home_ownership,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Print the dashboard and risk analysis views as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let input = args.to_input();
    let assessment = assess(&input).map_err(SubmissionError::from)?;

    if args.json {
        match serde_json::to_string_pretty(&assessment) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let dashboard = DashboardSnapshot::sample();
    let risk = RiskAnalysisView::sample();

    if args.json {
        let payload = serde_json::json!({ "dashboard": dashboard, "riskAnalysis": risk });
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Dashboard payload unavailable: {err}"),
        }
        return Ok(());
    }

    let navigation = NavigationView::for_tab(NavigationTab::Dashboard);
    println!("{} - {}", navigation.product, navigation.tagline);
    println!("\n{}", navigation.title);
    for card in &dashboard.metrics {
        println!("- {}: {}", card.label, card.display);
    }
    println!("\nRecent loan applications");
    for row in &dashboard.recent_applications {
        println!(
            "- {} | {} | {} | {}",
            row.applicant, row.loan_amount_display, row.status_label, row.submitted_on
        );
    }

    render_distribution(&risk.distribution);
    println!("\nLoans by risk level");
    for loan in &risk.loans {
        println!(
            "- #{} {} | {} | {}",
            loan.id, loan.applicant, loan.amount_display, loan.risk_label
        );
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("LendWise intake demo");
    let service = LoanApplicationService::new(Arc::new(TracingSubmissionLog));

    let mut recommendations = Vec::new();
    for submission in demo_submissions() {
        let receipt = match service.submit(submission) {
            Ok(receipt) => receipt,
            Err(err) => {
                println!("  Submission rejected: {err}");
                continue;
            }
        };
        let view = receipt.summary_view();
        println!(
            "\n- {} ({}) -> {} | {} for {}",
            view.id.0,
            view.applicant,
            view.recommendation,
            view.loan_purpose,
            lendwise::lending::portfolio::format::currency(receipt.loan_amount.round() as u64)
        );
        println!("  Rationale: {}", view.rationale);
        println!("  DTI {} | LTI {}", view.dti, view.lti);
        recommendations.push(receipt.assessment.recommendation);
    }

    render_distribution(&RiskDistribution::from_recommendations(recommendations));
    Ok(())
}

fn render_assessment(assessment: &RiskAssessment) {
    println!("Risk assessment");
    println!(
        "- Score: {} / 100 -> {}",
        assessment.score,
        assessment.recommendation.label()
    );
    println!("- Debt-to-income: {}", assessment.dti_display());
    println!("- Loan-to-income: {}", assessment.lti_display());
    println!("Score components:");
    for component in &assessment.components {
        println!(
            "  - {:?}: {:.1} ({})",
            component.factor, component.points, component.note
        );
    }
}

fn render_distribution(distribution: &RiskDistribution) {
    println!("\nLoan risk distribution ({} loans)", distribution.total);
    for slice in &distribution.slices {
        println!(
            "- {}: {} ({:.1}%) {}",
            slice.name, slice.value, slice.share_pct, slice.color
        );
    }
}

fn demo_submissions() -> Vec<LoanApplicationSubmission> {
    vec![
        LoanApplicationSubmission {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            loan_purpose: LoanPurpose::Home,
            employment_status: EmploymentStatus::FullTime,
            financials: ApplicationInput {
                credit_score: 750,
                annual_income: 90_000.0,
                monthly_debt: 500.0,
                monthly_rent: 0.0,
                loan_amount: 50_000.0,
                employment_years: 5.0,
                existing_loans: 0.0,
                bankruptcy_history: BankruptcyHistory::No,
                home_ownership: HomeOwnership::Own,
            },
        },
        LoanApplicationSubmission {
            full_name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            loan_purpose: LoanPurpose::Business,
            employment_status: EmploymentStatus::SelfEmployed,
            financials: ApplicationInput {
                credit_score: 640,
                annual_income: 54_000.0,
                monthly_debt: 300.0,
                monthly_rent: 1_200.0,
                loan_amount: 75_000.0,
                employment_years: 5.0,
                existing_loans: 2.0,
                bankruptcy_history: BankruptcyHistory::No,
                home_ownership: HomeOwnership::Rent,
            },
        },
        LoanApplicationSubmission {
            full_name: "Bob Johnson".to_string(),
            email: "bob.johnson@example.com".to_string(),
            loan_purpose: LoanPurpose::Personal,
            employment_status: EmploymentStatus::PartTime,
            financials: ApplicationInput {
                credit_score: 520,
                annual_income: 30_000.0,
                monthly_debt: 1_100.0,
                monthly_rent: 900.0,
                loan_amount: 100_000.0,
                employment_years: 0.5,
                existing_loans: 4.0,
                bankruptcy_history: BankruptcyHistory::Yes,
                home_ownership: HomeOwnership::Other,
            },
        },
    ]
}
