//! Sidebar navigation shell.

use serde::Serialize;

pub const PRODUCT_NAME: &str = "LendWise";
pub const PRODUCT_TAGLINE: &str = "Lending Decision Tool";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationTab {
    #[default]
    Dashboard,
    LoanApplication,
    RiskAnalysis,
    Settings,
}

impl NavigationTab {
    pub const ALL: [NavigationTab; 4] = [
        NavigationTab::Dashboard,
        NavigationTab::LoanApplication,
        NavigationTab::RiskAnalysis,
        NavigationTab::Settings,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::LoanApplication => "loan-application",
            Self::RiskAnalysis => "risk-analysis",
            Self::Settings => "settings",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::LoanApplication => "Loan Application",
            Self::RiskAnalysis => "Risk Analysis",
            Self::Settings => "Settings",
        }
    }

    /// Unknown slugs land on the dashboard.
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.slug() == slug.trim())
            .unwrap_or_default()
    }

    /// Page header: first letter capitalised, first hyphen replaced by a space.
    pub fn header_title(self) -> String {
        let slug = self.slug().replacen('-', " ", 1);
        let mut chars = slug.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    pub tab: NavigationTab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub product: &'static str,
    pub tagline: &'static str,
    pub active: NavigationTab,
    pub title: String,
    pub entries: Vec<NavigationEntry>,
}

impl NavigationView {
    pub fn for_tab(active: NavigationTab) -> Self {
        Self {
            product: PRODUCT_NAME,
            tagline: PRODUCT_TAGLINE,
            active,
            title: active.header_title(),
            entries: NavigationTab::ALL
                .into_iter()
                .map(|tab| NavigationEntry {
                    tab,
                    label: tab.label(),
                    active: tab == active,
                })
                .collect(),
        }
    }
}
