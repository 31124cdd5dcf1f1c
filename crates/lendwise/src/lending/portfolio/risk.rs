use serde::Serialize;

use super::format::currency;
use super::Tone;
use crate::lending::underwriting::Recommendation;

/// Chart palette; slices reuse it cyclically.
pub const PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub const fn distribution_label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Green,
            Self::Medium => Tone::Yellow,
            Self::High => Tone::Red,
        }
    }
}

impl From<Recommendation> for RiskLevel {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Approve => Self::Low,
            Recommendation::Review => Self::Medium,
            Recommendation::Decline => Self::High,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    pub name: &'static str,
    pub level: RiskLevel,
    pub value: u32,
    pub share_pct: f64,
    pub color: &'static str,
}

/// Pie-chart data for the risk mix of the loan book.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDistribution {
    pub total: u32,
    pub slices: Vec<DistributionSlice>,
}

impl RiskDistribution {
    /// Shares are rounded to one decimal; an empty book reports 0% everywhere.
    pub fn from_counts(counts: &[(RiskLevel, u32)]) -> Self {
        let total: u32 = counts.iter().map(|(_, value)| *value).sum();
        let slices = counts
            .iter()
            .enumerate()
            .map(|(index, (level, value))| {
                let share_pct = if total == 0 {
                    0.0
                } else {
                    (f64::from(*value) / f64::from(total) * 1000.0).round() / 10.0
                };
                DistributionSlice {
                    name: level.distribution_label(),
                    level: *level,
                    value: *value,
                    share_pct,
                    color: PALETTE[index % PALETTE.len()],
                }
            })
            .collect();

        Self { total, slices }
    }

    /// Tally scored recommendations into Low/Medium/High slices.
    pub fn from_recommendations<I>(recommendations: I) -> Self
    where
        I: IntoIterator<Item = Recommendation>,
    {
        let mut counts: Vec<(RiskLevel, u32)> =
            RiskLevel::ALL.iter().map(|level| (*level, 0)).collect();
        for recommendation in recommendations {
            let level = RiskLevel::from(recommendation);
            if let Some(entry) = counts.iter_mut().find(|(candidate, _)| *candidate == level) {
                entry.1 += 1;
            }
        }
        Self::from_counts(&counts)
    }

    pub fn sample() -> Self {
        Self::from_counts(&[
            (RiskLevel::Low, 60),
            (RiskLevel::Medium, 30),
            (RiskLevel::High, 10),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRecord {
    pub id: u32,
    pub applicant: String,
    pub amount: u64,
    pub risk: RiskLevel,
}

impl LoanRecord {
    pub fn detail(&self) -> LoanDetail {
        LoanDetail {
            id: self.id,
            applicant: self.applicant.clone(),
            amount: self.amount,
            amount_display: currency(self.amount),
            risk: self.risk,
            risk_label: self.risk.label(),
            risk_tone: self.risk.tone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetail {
    pub id: u32,
    pub applicant: String,
    pub amount: u64,
    pub amount_display: String,
    pub risk: RiskLevel,
    pub risk_label: &'static str,
    pub risk_tone: Tone,
}

/// Data behind the risk-analysis page: the distribution chart and the loan table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisView {
    pub distribution: RiskDistribution,
    pub loans: Vec<LoanDetail>,
}

impl RiskAnalysisView {
    pub fn build(distribution: RiskDistribution, loans: &[LoanRecord]) -> Self {
        Self {
            distribution,
            loans: loans.iter().map(LoanRecord::detail).collect(),
        }
    }

    pub fn sample() -> Self {
        Self::build(RiskDistribution::sample(), &sample_loans())
    }

    /// Backs the "View Details" panel.
    pub fn loan(&self, id: u32) -> Option<&LoanDetail> {
        self.loans.iter().find(|loan| loan.id == id)
    }
}

fn sample_loans() -> Vec<LoanRecord> {
    vec![
        LoanRecord {
            id: 1,
            applicant: "John Doe".to_string(),
            amount: 50_000,
            risk: RiskLevel::Low,
        },
        LoanRecord {
            id: 2,
            applicant: "Jane Smith".to_string(),
            amount: 75_000,
            risk: RiskLevel::Medium,
        },
        LoanRecord {
            id: 3,
            applicant: "Bob Johnson".to_string(),
            amount: 100_000,
            risk: RiskLevel::High,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_distribution_matches_chart() {
        let distribution = RiskDistribution::sample();

        assert_eq!(distribution.total, 100);
        let rendered: Vec<(&str, u32, f64, &str)> = distribution
            .slices
            .iter()
            .map(|slice| (slice.name, slice.value, slice.share_pct, slice.color))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Low Risk", 60, 60.0, "#0088FE"),
                ("Medium Risk", 30, 30.0, "#00C49F"),
                ("High Risk", 10, 10.0, "#FFBB28"),
            ]
        );
    }

    #[test]
    fn palette_wraps_after_four_slices() {
        let counts: Vec<(RiskLevel, u32)> = (0..5).map(|_| (RiskLevel::Low, 1)).collect();

        let distribution = RiskDistribution::from_counts(&counts);

        assert_eq!(distribution.slices[3].color, "#FF8042");
        assert_eq!(distribution.slices[4].color, "#0088FE");
        assert_eq!(distribution.slices[0].share_pct, 20.0);
    }

    #[test]
    fn empty_book_reports_zero_shares() {
        let distribution = RiskDistribution::from_counts(&[(RiskLevel::Low, 0)]);
        assert_eq!(distribution.total, 0);
        assert_eq!(distribution.slices[0].share_pct, 0.0);
    }

    #[test]
    fn recommendations_tally_into_risk_levels() {
        let distribution = RiskDistribution::from_recommendations([
            Recommendation::Approve,
            Recommendation::Approve,
            Recommendation::Decline,
        ]);

        let values: Vec<u32> = distribution.slices.iter().map(|slice| slice.value).collect();
        assert_eq!(values, vec![2, 0, 1]);
        assert_eq!(distribution.slices[0].share_pct, 66.7);
        assert_eq!(distribution.slices[2].share_pct, 33.3);
    }

    #[test]
    fn loan_details_are_looked_up_by_id() {
        let view = RiskAnalysisView::sample();

        let loan = view.loan(3).expect("Bob Johnson present");
        assert_eq!(loan.applicant, "Bob Johnson");
        assert_eq!(loan.amount_display, "$100,000");
        assert_eq!(loan.risk_label, "High");
        assert!(view.loan(42).is_none());
    }

    #[test]
    fn risk_view_serializes_camel_case_fields() {
        let value = serde_json::to_value(RiskAnalysisView::sample()).expect("serializes");

        assert_eq!(value["distribution"]["slices"][0]["sharePct"], 60.0);
        assert_eq!(value["loans"][2]["amountDisplay"], "$100,000");
        assert_eq!(value["loans"][2]["riskLabel"], "High");
        assert!(value["loans"][2].get("risk_label").is_none());
    }
}
