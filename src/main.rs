use anyhow::Result;
use clap::{Parser, Subcommand};

use padoca::cli::{handle_catalog_command, handle_days_command, handle_quote_command};
use padoca::cli::{DaysArgs, QuoteArgs};
use padoca::config::{BakeryPaths, Settings};
use padoca::models::Catalog;

#[derive(Parser)]
#[command(
    name = "padoca",
    version,
    about = "Order-budgeting calculator for a small bakery",
    long_about = "Padoca computes order quotes for a small bakery: pick products \
                  and quantities, select a date range (optionally dropping weekends \
                  and specific days), and get per-item totals, a grand total, \
                  exports, and a pre-filled vendor message link.",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products and prices
    Catalog,

    /// Compute a quote for an order
    Quote(QuoteArgs),

    /// List the billable days a range offers
    Days(DaysArgs),

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BakeryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Catalog => {
            handle_catalog_command(&Catalog::default_products());
        }
        Commands::Quote(args) => {
            handle_quote_command(&settings, args)?;
        }
        Commands::Days(args) => {
            handle_days_command(args)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!("Settings file already exists: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Settings file created: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Settings file: {}", paths.settings_file().display());
            println!(
                "  initialized: {}",
                if paths.is_initialized() { "yes" } else { "no (defaults in use)" }
            );
            println!("Vendor phone: {}", settings.vendor_phone);
            println!(
                "Exclude weekends by default: {}",
                settings.exclude_weekends_default
            );
            match &settings.greeting_name {
                Some(name) => println!("Greeting name: {}", name),
                None => println!("Greeting name: (none)"),
            }
        }
    }

    Ok(())
}
