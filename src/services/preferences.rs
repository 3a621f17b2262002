//! Preferences service
//!
//! Loads device preferences once and exposes one setter per field. Each
//! setter writes its own key and only then updates the in-memory value.

use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::error::{TallyError, TallyResult};
use crate::models::preferences::{decode_flag, encode_flag};
use crate::models::{BudgetPeriod, Preferences, Theme, SUPPORTED_LANGUAGES};
use crate::storage::KeyValueStore;

pub const BIOMETRIC_ENABLED_KEY: &str = "biometricEnabled";
pub const NOTIFICATIONS_ENABLED_KEY: &str = "notificationsEnabled";
pub const EXPENSE_ALERTS_KEY: &str = "expenseAlerts";
pub const BUDGET_ALERTS_KEY: &str = "budgetAlerts";
pub const WEEKLY_REPORTS_KEY: &str = "weeklyReports";
pub const REMINDER_ALERTS_KEY: &str = "reminderAlerts";
pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";
pub const BUDGET_PERIOD_KEY: &str = "budgetPeriod";

/// Credentials cached for biometric login; cleared when biometrics are off
pub const STORED_CREDENTIAL_KEYS: &[&str] = &["storedUsername", "storedPassword"];

/// Service owning the device preferences
pub struct PreferencesService<'a, S> {
    store: &'a S,
    preferences: Preferences,
}

impl<'a, S: KeyValueStore> PreferencesService<'a, S> {
    /// Load every preference from the store
    ///
    /// Each field falls back to its default independently when the key is
    /// missing, unreadable or holds an unrecognized value.
    pub async fn load(store: &'a S) -> Self {
        let defaults = Preferences::default();

        let preferences = Preferences {
            biometric_enabled: read_field(store, BIOMETRIC_ENABLED_KEY, decode_flag)
                .await
                .unwrap_or(defaults.biometric_enabled),
            notifications_enabled: read_field(store, NOTIFICATIONS_ENABLED_KEY, decode_flag)
                .await
                .unwrap_or(defaults.notifications_enabled),
            expense_alerts: read_field(store, EXPENSE_ALERTS_KEY, decode_flag)
                .await
                .unwrap_or(defaults.expense_alerts),
            budget_alerts: read_field(store, BUDGET_ALERTS_KEY, decode_flag)
                .await
                .unwrap_or(defaults.budget_alerts),
            weekly_reports: read_field(store, WEEKLY_REPORTS_KEY, decode_flag)
                .await
                .unwrap_or(defaults.weekly_reports),
            reminder_alerts: read_field(store, REMINDER_ALERTS_KEY, decode_flag)
                .await
                .unwrap_or(defaults.reminder_alerts),
            theme: read_field(store, THEME_KEY, |raw| Theme::from_str(raw).ok())
                .await
                .unwrap_or(defaults.theme),
            language: read_field(store, LANGUAGE_KEY, parse_language)
                .await
                .unwrap_or_else(|| defaults.language.clone()),
            budget_period: read_field(store, BUDGET_PERIOD_KEY, |raw| {
                BudgetPeriod::from_str(raw).ok()
            })
            .await
            .unwrap_or(defaults.budget_period),
        };

        debug!(?preferences, "loaded preferences");
        Self { store, preferences }
    }

    /// Current preferences
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Enable or disable biometric login
    ///
    /// Turning it off also forgets the cached login credentials.
    pub async fn set_biometric_enabled(&mut self, enabled: bool) -> TallyResult<()> {
        self.write(BIOMETRIC_ENABLED_KEY, encode_flag(enabled)).await?;
        self.preferences.biometric_enabled = enabled;

        if !enabled {
            for key in STORED_CREDENTIAL_KEYS {
                self.store.remove(key).await.map_err(into_write_error)?;
            }
        }
        Ok(())
    }

    pub async fn set_notifications_enabled(&mut self, enabled: bool) -> TallyResult<()> {
        self.write(NOTIFICATIONS_ENABLED_KEY, encode_flag(enabled)).await?;
        self.preferences.notifications_enabled = enabled;
        Ok(())
    }

    pub async fn set_expense_alerts(&mut self, enabled: bool) -> TallyResult<()> {
        self.write(EXPENSE_ALERTS_KEY, encode_flag(enabled)).await?;
        self.preferences.expense_alerts = enabled;
        Ok(())
    }

    pub async fn set_budget_alerts(&mut self, enabled: bool) -> TallyResult<()> {
        self.write(BUDGET_ALERTS_KEY, encode_flag(enabled)).await?;
        self.preferences.budget_alerts = enabled;
        Ok(())
    }

    pub async fn set_weekly_reports(&mut self, enabled: bool) -> TallyResult<()> {
        self.write(WEEKLY_REPORTS_KEY, encode_flag(enabled)).await?;
        self.preferences.weekly_reports = enabled;
        Ok(())
    }

    pub async fn set_reminder_alerts(&mut self, enabled: bool) -> TallyResult<()> {
        self.write(REMINDER_ALERTS_KEY, encode_flag(enabled)).await?;
        self.preferences.reminder_alerts = enabled;
        Ok(())
    }

    pub async fn set_theme(&mut self, theme: Theme) -> TallyResult<()> {
        self.write(THEME_KEY, theme.as_str()).await?;
        self.preferences.theme = theme;
        Ok(())
    }

    /// Change the display language; only supported languages are accepted
    pub async fn set_language(&mut self, language: &str) -> TallyResult<()> {
        let language = parse_language(language).ok_or_else(|| {
            TallyError::Validation(format!(
                "Unsupported language '{}' (available: {})",
                language,
                SUPPORTED_LANGUAGES.join(", ")
            ))
        })?;

        self.write(LANGUAGE_KEY, &language).await?;
        self.preferences.language = language;
        Ok(())
    }

    pub async fn set_budget_period(&mut self, period: BudgetPeriod) -> TallyResult<()> {
        self.write(BUDGET_PERIOD_KEY, period.as_str()).await?;
        self.preferences.budget_period = period;
        Ok(())
    }

    async fn write(&self, key: &str, value: &str) -> TallyResult<()> {
        self.store
            .set(key, value.to_string())
            .await
            .map_err(into_write_error)?;
        info!(key, value, "saved preference");
        Ok(())
    }
}

async fn read_field<S, T, F>(store: &S, key: &str, parse: F) -> Option<T>
where
    S: KeyValueStore,
    F: FnOnce(&str) -> Option<T>,
{
    let raw = match store.get(key).await {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(key, error = %e, "failed to read preference, using default");
            return None;
        }
    };

    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!(key, value = %raw, "unrecognized preference value, using default");
    }
    parsed
}

fn parse_language(raw: &str) -> Option<String> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.eq_ignore_ascii_case(raw.trim()))
        .map(|lang| lang.to_string())
}

fn into_write_error(err: TallyError) -> TallyError {
    match err {
        TallyError::StorageWrite(msg) => TallyError::StorageWrite(msg),
        other => TallyError::StorageWrite(other.to_string()),
    }
}
