//! Device preferences
//!
//! Switches and choices from the settings screen. Each field is persisted
//! under its own key as a plain string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the app can display
pub const SUPPORTED_LANGUAGES: &[&str] = &["English"];

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "System Default",
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!(
                "unknown theme '{}' (expected system, light or dark)",
                other
            )),
        }
    }
}

/// Length of a budgeting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Weekly",
            Self::Month => "Monthly",
            Self::Quarter => "Quarterly",
            Self::Year => "Yearly",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(format!(
                "unknown budget period '{}' (expected week, month, quarter or year)",
                other
            )),
        }
    }
}

/// All user-facing preferences for this device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub biometric_enabled: bool,
    pub notifications_enabled: bool,
    pub expense_alerts: bool,
    pub budget_alerts: bool,
    pub weekly_reports: bool,
    pub reminder_alerts: bool,
    pub theme: Theme,
    pub language: String,
    pub budget_period: BudgetPeriod,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            biometric_enabled: false,
            notifications_enabled: false,
            expense_alerts: true,
            budget_alerts: true,
            weekly_reports: false,
            reminder_alerts: true,
            theme: Theme::default(),
            language: SUPPORTED_LANGUAGES[0].to_string(),
            budget_period: BudgetPeriod::default(),
        }
    }
}

/// Encode a flag the way the store expects it
pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Decode a stored flag; anything other than "true"/"false" is rejected
pub fn decode_flag(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
