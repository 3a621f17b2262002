use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally::cli::{handle_category_command, handle_settings_command};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Expense/income categories and preferences for a personal-finance app",
    long_about = "Tally keeps the device-side state of a personal-finance app: \
                  the expense and income category lists and the user's \
                  preferences, persisted to a local key-value store."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(tally::cli::CategoryCommands),

    /// Preference commands
    #[command(subcommand)]
    Settings(tally::cli::SettingsCommands),

    /// Show current configuration and paths
    Config,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    paths.ensure_directories()?;
    let store = JsonFileStore::open(paths.store_file(&settings.store_file))?;

    match cli.command {
        Some(Commands::Category(cmd)) => {
            handle_category_command(&store, cmd).await?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&store, cmd).await?;
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Store file:     {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            println!("  Log filter:     {}", settings.log_filter);
        }
        None => {
            println!("Tally - expense and income categories");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally category list' to see your categories.");
        }
    }

    Ok(())
}
