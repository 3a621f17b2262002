//! Settings CLI commands
//!
//! Shows and changes the device preferences.

use clap::{Subcommand, ValueEnum};

use crate::display::format_preferences;
use crate::error::{TallyError, TallyResult};
use crate::models::{BudgetPeriod, Theme};
use crate::services::PreferencesService;
use crate::storage::KeyValueStore;

/// Preference that `settings set` can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreferenceField {
    Biometric,
    Notifications,
    ExpenseAlerts,
    BudgetAlerts,
    WeeklyReports,
    ReminderAlerts,
    Theme,
    Language,
    BudgetPeriod,
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,

    /// Change one preference
    Set {
        /// Preference to change
        #[arg(value_enum)]
        field: PreferenceField,
        /// New value (on/off for switches)
        value: String,
    },
}

/// Handle a settings command
pub async fn handle_settings_command<S: KeyValueStore>(
    store: &S,
    cmd: SettingsCommands,
) -> TallyResult<()> {
    let mut service = PreferencesService::load(store).await;

    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_preferences(service.preferences()));
        }

        SettingsCommands::Set { field, value } => {
            apply(&mut service, field, &value).await?;
            println!("Preference updated.");
            print!("{}", format_preferences(service.preferences()));
        }
    }

    Ok(())
}

async fn apply<S: KeyValueStore>(
    service: &mut PreferencesService<'_, S>,
    field: PreferenceField,
    value: &str,
) -> TallyResult<()> {
    match field {
        PreferenceField::Biometric => service.set_biometric_enabled(parse_switch(value)?).await,
        PreferenceField::Notifications => {
            service
                .set_notifications_enabled(parse_switch(value)?)
                .await
        }
        PreferenceField::ExpenseAlerts => service.set_expense_alerts(parse_switch(value)?).await,
        PreferenceField::BudgetAlerts => service.set_budget_alerts(parse_switch(value)?).await,
        PreferenceField::WeeklyReports => service.set_weekly_reports(parse_switch(value)?).await,
        PreferenceField::ReminderAlerts => {
            service.set_reminder_alerts(parse_switch(value)?).await
        }
        PreferenceField::Theme => {
            let theme: Theme = value.parse().map_err(TallyError::Validation)?;
            service.set_theme(theme).await
        }
        PreferenceField::Language => service.set_language(value).await,
        PreferenceField::BudgetPeriod => {
            let period: BudgetPeriod = value.parse().map_err(TallyError::Validation)?;
            service.set_budget_period(period).await
        }
    }
}

fn parse_switch(value: &str) -> TallyResult<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(TallyError::Validation(format!(
            "Expected on or off, got '{}'",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::preferences::THEME_KEY;
    use crate::storage::MemoryStore;

    #[test]
    fn test_parse_switch() {
        assert!(parse_switch("ON").unwrap());
        assert!(!parse_switch("false").unwrap());
        assert!(parse_switch("sometimes").unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_apply_theme() {
        let store = MemoryStore::new();
        let mut service = PreferencesService::load(&store).await;

        apply(&mut service, PreferenceField::Theme, "light").await.unwrap();
        assert_eq!(service.preferences().theme, Theme::Light);
        assert_eq!(store.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));

        let err = apply(&mut service, PreferenceField::Theme, "sepia")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
