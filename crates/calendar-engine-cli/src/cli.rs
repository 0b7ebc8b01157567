use clap::{Parser, Subcommand};

/// Calendar arithmetic, date comparison and holiday lookup.
#[derive(Parser)]
#[command(name = "calendar-engine", version, about = "Calendar arithmetic and holiday lookup")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Pin the clock to this datetime instead of reading the system clock.
    #[arg(long, global = true, env = "CALENDAR_ENGINE_NOW")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a signed amount to a datetime.
    Add {
        /// Starting datetime (e.g. 2025-01-31 or 2025-01-31T18:30:00).
        datetime: String,
        /// Signed whole amount.
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Unit of the amount.
        #[arg(short, long, default_value = "days")]
        unit: String,
    },
    /// Whether A is strictly before B.
    Before { a: String, b: String },
    /// Whether X lies strictly between FROM and TO.
    Within { x: String, from: String, to: String },
    /// Whether A and B fall on the same calendar date.
    SameDay { a: String, b: String },
    /// List the holidays of a year (defaults to the current year).
    Holidays {
        #[arg(allow_hyphen_values = true)]
        year: Option<i32>,
    },
    /// Whether a datetime falls on a holiday.
    IsHoliday { datetime: String },
    /// Print the current year.
    CurrentYear,
}
