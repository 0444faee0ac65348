mod cli;
mod logging;

use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use amlich::lunar::{self, fmt, LunarCycle};
use amlich::{Config, Date, LunarDate, TimeZone};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let tz = time_zone(&cli)?;
    info!(tz = tz.hours(), "using time zone");

    match cli.command {
        Command::ToLunar { date } => to_lunar(date.as_deref(), tz),
        Command::ToSolar {
            year,
            month,
            day,
            leap,
        } => {
            let date = lunar::lunar_to_solar(day, month, year, leap, tz)
                .context("cannot convert lunar date")?;
            println!("{date}");
            Ok(())
        }
        Command::Year { year } => {
            list_year(year, tz);
            Ok(())
        }
    }
}

fn time_zone(cli: &Cli) -> Result<TimeZone> {
    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Config::from_toml_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => Config::default(),
    };
    match cli.tz {
        Some(hours) => Ok(TimeZone::new(hours)?),
        None => Ok(config.time_zone),
    }
}

fn to_lunar(date: Option<&str>, tz: TimeZone) -> Result<()> {
    let date = match date {
        Some(s) => s.parse::<Date>()?,
        None => Date::from(chrono::Local::now().date_naive()),
    };
    let lunar = LunarDate::from_date(date, tz);
    let month = lunar.month;
    println!("{date} -> {lunar}");
    println!(
        "{}, {}, năm {}",
        fmt::day(lunar.day),
        month.name(),
        fmt::year(lunar.year)
    );
    println!(
        "Ngày {}, tháng {}, tiết {}",
        fmt::sexagenary(date.sexagenary()),
        fmt::sexagenary(lunar::sexagenary_for_month(lunar.year, month.num())),
        fmt::solar_term(lunar::solar_term_for(date, tz))
    );
    Ok(())
}

fn list_year(year: i32, tz: TimeZone) {
    let cycle = LunarCycle::new(year, tz);
    // last entry is the next cycle's month 11
    let end = cycle.months.len().saturating_sub(1);
    for m in &cycle.months[..end] {
        println!("{}  {}", m.date, m.month.name());
    }
}
