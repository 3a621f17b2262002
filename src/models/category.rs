//! Category and CategoryKind models
//!
//! Categories tag expenses and income. Each one carries a display name, an
//! icon identifier and a hex color. The two kinds are stored independently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two category collections an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    #[default]
    Expense,
    Income,
}

impl CategoryKind {
    /// Both kinds, in display order
    pub fn all() -> &'static [Self] {
        &[Self::Expense, Self::Income]
    }

    /// Key under which this collection is persisted
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Expense => "expenseCategories",
            Self::Income => "incomeCategories",
        }
    }

    /// Compiled-in defaults used when nothing usable is persisted
    pub fn defaults(&self) -> Vec<Category> {
        let table: &[(&str, &str, &str)] = match self {
            Self::Expense => &[
                ("Food", "fast-food", "#FF9500"),
                ("Shopping", "cart", "#5856D6"),
                ("Transport", "car", "#FF2D55"),
                ("Health", "fitness", "#4CD964"),
                ("Entertainment", "film", "#FF9500"),
                ("Education", "school", "#5AC8FA"),
                ("Bills", "receipt", "#007AFF"),
                ("Other", "ellipsis-horizontal", "#8E8E93"),
            ],
            Self::Income => &[
                ("Salary", "cash", "#4CD964"),
                ("Investments", "trending-up", "#007AFF"),
                ("Freelance", "briefcase", "#5856D6"),
                ("Gifts", "gift", "#FF2D55"),
                ("Other", "ellipsis-horizontal", "#8E8E93"),
            ],
        };

        table
            .iter()
            .map(|(name, icon, color)| Category::new(*name, *icon, *color))
            .collect()
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" | "expenses" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(format!(
                "unknown category kind '{}' (expected 'expense' or 'income')",
                other
            )),
        }
    }
}

/// Icons offered by the category picker
pub const AVAILABLE_ICONS: &[&str] = &[
    "fast-food",
    "cart",
    "car",
    "fitness",
    "film",
    "school",
    "receipt",
    "home",
    "airplane",
    "gift",
    "cash",
    "briefcase",
    "card",
    "pricetag",
    "cafe",
    "beer",
    "medkit",
    "basketball",
    "book",
    "build",
    "shirt",
    "phone-portrait",
    "umbrella",
    "wifi",
    "game-controller",
    "bicycle",
    "bus",
    "planet",
    "paw",
    "musical-notes",
    "brush",
    "ellipsis-horizontal",
];

/// Colors offered by the category picker
pub const AVAILABLE_COLORS: &[&str] = &[
    "#FF3B30", "#FF9500", "#FFCC00", "#4CD964", "#5AC8FA", "#007AFF", "#5856D6", "#FF2D55",
    "#8E8E93", "#34C759", "#32ADE6", "#AF52DE",
];

/// A user-visible expense or income category
///
/// Records are immutable once appended to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name
    pub name: String,

    /// Glyph identifier from the external icon set
    pub icon: String,

    /// Hex RGB color, e.g. `#FF9500`
    pub color: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.icon.trim().is_empty() {
            return Err(CategoryValidationError::EmptyIcon);
        }

        if self.color.trim().is_empty() {
            return Err(CategoryValidationError::EmptyColor);
        }

        Ok(())
    }

    /// Case-insensitive substring match on the name
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    EmptyIcon,
    EmptyColor,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::EmptyIcon => write!(f, "Category icon cannot be empty"),
            Self::EmptyColor => write!(f, "Category color cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        assert_eq!(CategoryKind::Expense.defaults().len(), 8);
        assert_eq!(CategoryKind::Income.defaults().len(), 5);
    }

    #[test]
    fn test_default_order() {
        let expense = CategoryKind::Expense.defaults();
        assert_eq!(expense[0], Category::new("Food", "fast-food", "#FF9500"));
        assert_eq!(
            expense[7],
            Category::new("Other", "ellipsis-horizontal", "#8E8E93")
        );

        let income = CategoryKind::Income.defaults();
        assert_eq!(income[0].name, "Salary");
        assert_eq!(income[4].name, "Other");
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(CategoryKind::Expense.storage_key(), "expenseCategories");
        assert_eq!(CategoryKind::Income.storage_key(), "incomeCategories");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("expense".parse::<CategoryKind>(), Ok(CategoryKind::Expense));
        assert_eq!("Income".parse::<CategoryKind>(), Ok(CategoryKind::Income));
        assert!("savings".parse::<CategoryKind>().is_err());
    }

    #[test]
    fn test_validation() {
        assert!(Category::new("Pets", "paw", "#AF52DE").validate().is_ok());

        assert_eq!(
            Category::new("  ", "paw", "#AF52DE").validate(),
            Err(CategoryValidationError::EmptyName)
        );
        assert_eq!(
            Category::new("Pets", "", "#AF52DE").validate(),
            Err(CategoryValidationError::EmptyIcon)
        );
        assert_eq!(
            Category::new("Pets", "paw", "").validate(),
            Err(CategoryValidationError::EmptyColor)
        );
    }

    #[test]
    fn test_matches_ignores_case() {
        let category = Category::new("Entertainment", "film", "#FF9500");
        assert!(category.matches("tain"));
        assert!(category.matches("ENTER"));
        assert!(!category.matches("food"));
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r##"{"id":"1","name":"Food","icon":"fast-food","color":"#FF6384"}"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category, Category::new("Food", "fast-food", "#FF6384"));
    }

    #[test]
    fn test_palettes() {
        assert_eq!(AVAILABLE_ICONS.len(), 32);
        assert_eq!(AVAILABLE_COLORS.len(), 12);
        assert!(AVAILABLE_COLORS.iter().all(|c| c.starts_with('#') && c.len() == 7));
    }
}
