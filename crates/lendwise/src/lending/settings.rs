//! User preferences edited on the settings page.
//!
//! Saving only logs the submitted preferences; nothing is written anywhere.

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }
}

/// Default risk threshold applied when reviewing applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskThreshold {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskThreshold {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub notifications_enabled: bool,
    pub dark_mode_enabled: bool,
    pub language: Language,
    pub risk_threshold: RiskThreshold,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            dark_mode_enabled: false,
            language: Language::default(),
            risk_threshold: RiskThreshold::default(),
        }
    }
}

/// Settings form handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SettingsService;

impl SettingsService {
    pub fn current(&self) -> UserSettings {
        UserSettings::default()
    }

    pub fn save(&self, settings: UserSettings) -> UserSettings {
        info!(
            notifications = settings.notifications_enabled,
            dark_mode = settings.dark_mode_enabled,
            language = settings.language.label(),
            risk_threshold = settings.risk_threshold.label(),
            "settings saved"
        );
        settings
    }
}
