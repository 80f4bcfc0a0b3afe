//! Quote CLI command
//!
//! Collects the order inputs, runs one synchronous calculation through the
//! session, and prints or exports the results.

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{PadocaError, PadocaResult};
use crate::export::{export_quote_csv, export_quote_json, export_quote_yaml};
use crate::models::DateRange;
use crate::report::{format_quote_table, order_message};
use crate::services::OrderSession;

use super::link::whatsapp_link;

/// Arguments for the quote command
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Item and quantity as "Name=QTY" (repeatable)
    #[arg(short, long = "item", value_name = "NAME=QTY", required = true)]
    pub items: Vec<String>,

    /// First day of the period (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last day of the period (YYYY-MM-DD); defaults to the start day
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Drop Saturdays and Sundays from the period
    #[arg(long)]
    pub exclude_weekends: bool,

    /// Drop a specific day from the period (YYYY-MM-DD, repeatable)
    #[arg(long = "exclude", value_name = "DATE")]
    pub exclusions: Vec<String>,

    /// Also write the quote as CSV to this path
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Also write the quote as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Also write the quote as YAML to this path
    #[arg(long, value_name = "PATH")]
    pub yaml: Option<PathBuf>,

    /// Print the pre-filled WhatsApp link for the vendor
    #[arg(long)]
    pub link: bool,
}

/// Parse a "Name=QTY" item specification
pub fn parse_item_spec(spec: &str) -> PadocaResult<(String, u32)> {
    let (name, qty) = spec.rsplit_once('=').ok_or_else(|| {
        PadocaError::Validation(format!("Expected \"Name=QTY\", got \"{}\"", spec))
    })?;

    let quantity: u32 = qty.trim().parse().map_err(|_| {
        PadocaError::Validation(format!("Invalid quantity \"{}\" in \"{}\"", qty, spec))
    })?;

    Ok((name.trim().to_string(), quantity))
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> PadocaResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| PadocaError::Validation(format!("Invalid date \"{}\", expected YYYY-MM-DD", s)))
}

/// Handle the quote command
pub fn handle_quote_command(settings: &Settings, args: QuoteArgs) -> PadocaResult<()> {
    let mut session = OrderSession::with_default_catalog();

    for spec in &args.items {
        let (name, quantity) = parse_item_spec(spec)?;
        session.select(&name, quantity)?;
    }

    let start = parse_date(&args.start)?;
    let range = match &args.end {
        Some(end) => DateRange::new(start, parse_date(end)?),
        None => DateRange::single(start),
    };

    let exclude_weekends = args.exclude_weekends || settings.exclude_weekends_default;

    let manual_exclusions = args
        .exclusions
        .iter()
        .map(|s| parse_date(s))
        .collect::<PadocaResult<Vec<_>>>()?;

    let result = session
        .quote(&range, exclude_weekends, &manual_exclusions)?
        .clone();
    let calendar = session.last_calendar().expect("quote succeeded");

    println!("Período: {} ({} dias)", range, calendar.day_count());
    println!();
    print!("{}", format_quote_table(&result));

    let message = order_message(&result, settings.greeting_name.as_deref());
    println!();
    println!("{}", message);

    if let Some(path) = &args.csv {
        let mut file = File::create(path)?;
        export_quote_csv(&result, &mut file)?;
        println!();
        println!("CSV salvo em {}", path.display());
    }

    if let Some(path) = &args.json {
        let mut file = File::create(path)?;
        export_quote_json(&result, &mut file, true)?;
        println!();
        println!("JSON salvo em {}", path.display());
    }

    if let Some(path) = &args.yaml {
        let mut file = File::create(path)?;
        export_quote_yaml(&result, &mut file)?;
        println!();
        println!("YAML salvo em {}", path.display());
    }

    if args.link {
        println!();
        println!("{}", whatsapp_link(&settings.vendor_phone, &message));
    }

    Ok(())
}
