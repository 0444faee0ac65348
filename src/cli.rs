use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vietnamese lunar calendar converter.
#[derive(Parser)]
#[command(name = "amlich", version, about = "Vietnamese lunar calendar converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// UTC offset in hours; overrides the configuration (default 7).
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub tz: Option<i32>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date (YYYY-MM-DD, default today) to the lunar calendar.
    ToLunar {
        /// Date to convert.
        date: Option<String>,
    },
    /// Convert a lunar date to the Gregorian calendar.
    ToSolar {
        /// Lunar year.
        #[arg(allow_hyphen_values = true)]
        year: i32,
        /// Lunar month, 1 to 12.
        month: u32,
        /// Day of the lunar month.
        day: u32,
        /// The month is a leap month.
        #[arg(long)]
        leap: bool,
    },
    /// List the months between the winter solstices ending in YEAR.
    Year {
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
}
