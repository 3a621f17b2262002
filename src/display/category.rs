//! Category display formatting
//!
//! Formats category collections and picker palettes for terminal output.

use crate::models::{Category, CategoryKind};

/// Format a collection as an aligned table
pub fn format_category_list(kind: CategoryKind, categories: &[&Category]) -> String {
    if categories.is_empty() {
        return format!("No {} categories found.\n", kind);
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let icon_width = categories
        .iter()
        .map(|c| c.icon.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<icon_width$}  Color\n",
        "Name", "Icon",
    ));
    output.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(name_width),
        "-".repeat(icon_width),
        "-".repeat(7)
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<name_width$}  {:<icon_width$}  {}\n",
            category.name, category.icon, category.color,
        ));
    }

    output
}

/// Format a palette of icons or colors, several per line
pub fn format_palette(items: &[&str], per_line: usize) -> String {
    let width = items.iter().map(|i| i.len()).max().unwrap_or(0);
    let mut output = String::new();

    for row in items.chunks(per_line.max(1)) {
        let line: Vec<String> = row.iter().map(|i| format!("{:<width$}", i)).collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');
    }

    output
}
