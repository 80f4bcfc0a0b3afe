//! Days CLI command
//!
//! Lists the billable days a range offers, so the user can see which
//! dates are available for manual exclusion before quoting.

use clap::Args;

use crate::error::PadocaResult;
use crate::models::DateRange;
use crate::services::calendar::offered_days;

use super::quote::parse_date;

/// Arguments for the days command
#[derive(Args, Debug)]
pub struct DaysArgs {
    /// First day of the period (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last day of the period (YYYY-MM-DD); defaults to the start day
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Drop Saturdays and Sundays from the listing
    #[arg(long)]
    pub exclude_weekends: bool,
}

/// Handle the days command
pub fn handle_days_command(args: DaysArgs) -> PadocaResult<()> {
    let start = parse_date(&args.start)?;
    let range = match &args.end {
        Some(end) => DateRange::new(start, parse_date(end)?),
        None => DateRange::single(start),
    };

    let days = offered_days(&range, args.exclude_weekends)?;

    for day in &days {
        println!("{}", day.format("%Y-%m-%d"));
    }
    println!("{} dias", days.len());

    Ok(())
}
