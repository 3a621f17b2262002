//! Preferences display formatting

use crate::models::Preferences;

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Format preferences as a labelled list
pub fn format_preferences(prefs: &Preferences) -> String {
    let rows = [
        ("Biometric login", on_off(prefs.biometric_enabled).to_string()),
        ("Notifications", on_off(prefs.notifications_enabled).to_string()),
        ("  Expense alerts", on_off(prefs.expense_alerts).to_string()),
        ("  Budget alerts", on_off(prefs.budget_alerts).to_string()),
        ("  Weekly reports", on_off(prefs.weekly_reports).to_string()),
        ("  Reminders", on_off(prefs.reminder_alerts).to_string()),
        ("Theme", prefs.theme.label().to_string()),
        ("Language", prefs.language.clone()),
        ("Budget period", prefs.budget_period.label().to_string()),
    ];

    let mut output = String::from("Preferences:\n");
    for (label, value) in rows {
        output.push_str(&format!("  {:<18}{}\n", format!("{}:", label), value));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults() {
        let output = format_preferences(&Preferences::default());
        assert!(output.starts_with("Preferences:\n"));
        assert!(output.contains("Biometric login:  off"));
        assert!(output.contains("Theme:            System Default"));
        assert!(output.contains("Budget period:    Monthly"));
    }
}
