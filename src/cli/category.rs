//! Category CLI commands
//!
//! Implements CLI commands for listing, searching and adding categories.

use clap::Subcommand;

use crate::display::{format_category_list, format_palette};
use crate::error::TallyResult;
use crate::models::{CategoryKind, AVAILABLE_COLORS, AVAILABLE_ICONS};
use crate::services::CategoryRegistry;
use crate::storage::KeyValueStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories of one kind
    List {
        /// Collection to show (expense or income)
        #[arg(short, long, default_value = "expense")]
        kind: CategoryKind,
    },

    /// Add a custom category
    Add {
        /// Category name
        name: String,
        /// Icon identifier (see `tally category icons`)
        #[arg(short, long)]
        icon: String,
        /// Hex color such as #FF9500 (see `tally category colors`)
        #[arg(short, long)]
        color: String,
        /// Collection to add to (expense or income)
        #[arg(short, long, default_value = "expense")]
        kind: CategoryKind,
    },

    /// Search categories by name
    Search {
        /// Text to look for, case-insensitive
        query: String,
        #[arg(short, long, default_value = "expense")]
        kind: CategoryKind,
    },

    /// Show the icon palette
    Icons,

    /// Show the color palette
    Colors,
}

/// Handle a category command
pub async fn handle_category_command<S: KeyValueStore>(
    store: &S,
    cmd: CategoryCommands,
) -> TallyResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let registry = CategoryRegistry::load(store).await;
            let categories: Vec<_> = registry.list_categories(kind).iter().collect();
            print!("{}", format_category_list(kind, &categories));
        }

        CategoryCommands::Add {
            name,
            icon,
            color,
            kind,
        } => {
            let mut registry = CategoryRegistry::load(store).await;
            let updated = registry.add_category(kind, &name, &icon, &color).await?;

            if let Some(added) = updated.last() {
                println!("New {} category added: {}", kind, added.name);
                println!("  Icon:  {}", added.icon);
                println!("  Color: {}", added.color);
            }
        }

        CategoryCommands::Search { query, kind } => {
            let registry = CategoryRegistry::load(store).await;
            let found = registry.search(kind, &query);
            print!("{}", format_category_list(kind, &found));
        }

        CategoryCommands::Icons => {
            print!("{}", format_palette(AVAILABLE_ICONS, 4));
        }

        CategoryCommands::Colors => {
            print!("{}", format_palette(AVAILABLE_COLORS, 6));
        }
    }

    Ok(())
}
