use lendwise::lending::underwriting::{BankruptcyHistory, HomeOwnership};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_bankruptcy(raw: &str) -> Result<BankruptcyHistory, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(BankruptcyHistory::Yes),
        "no" | "n" | "false" => Ok(BankruptcyHistory::No),
        _ => Err(format!("failed to parse '{raw}' as yes/no")),
    }
}

pub(crate) fn parse_home_ownership(raw: &str) -> Result<HomeOwnership, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "own" => Ok(HomeOwnership::Own),
        "mortgage" => Ok(HomeOwnership::Mortgage),
        "rent" => Ok(HomeOwnership::Rent),
        "other" => Ok(HomeOwnership::Other),
        _ => Err(format!(
            "failed to parse '{raw}' as one of own, mortgage, rent, other"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bankruptcy_flags_accept_common_spellings() {
        assert_eq!(parse_bankruptcy(" YES "), Ok(BankruptcyHistory::Yes));
        assert_eq!(parse_bankruptcy("false"), Ok(BankruptcyHistory::No));
        assert!(parse_bankruptcy("maybe").is_err());
    }

    #[test]
    fn home_ownership_is_case_insensitive() {
        assert_eq!(parse_home_ownership("Mortgage"), Ok(HomeOwnership::Mortgage));
        assert!(parse_home_ownership("castle")
            .expect_err("unknown value")
            .contains("castle"));
    }
}
