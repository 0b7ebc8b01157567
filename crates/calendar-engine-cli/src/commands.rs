use anyhow::{Context, Result};
use calendar_engine::{
    current_year, holiday_name, is_date_before, is_same_day, is_within_range, named_holidays,
    parse_amount, require_valid_instant, AdjustedInstant, AmountUnit, Clock, FixedClock, Instant,
    SystemClock,
};
use serde_json::json;
use tracing::info;

use crate::cli::{Cli, Command};

/// Execute the parsed command and render its output.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Add {
            datetime,
            amount,
            unit,
        } => {
            let original = instant_arg("datetime", datetime)?;
            let amount = parse_amount(amount).context("invalid AMOUNT argument")?;
            let unit: AmountUnit = unit.parse().context("invalid --unit argument")?;
            let report = AdjustedInstant::compute(original, amount, unit)?;
            info!(%original, amount, %unit, adjusted = %report.adjusted, "added");
            if cli.json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(report.adjusted.to_string())
            }
        }
        Command::Before { a, b } => {
            let result = is_date_before(instant_arg("A", a)?, instant_arg("B", b)?);
            render_bool(cli.json, "before", result)
        }
        Command::Within { x, from, to } => {
            let result = is_within_range(
                instant_arg("X", x)?,
                instant_arg("FROM", from)?,
                instant_arg("TO", to)?,
            )?;
            render_bool(cli.json, "within", result)
        }
        Command::SameDay { a, b } => {
            let result = is_same_day(instant_arg("A", a)?, instant_arg("B", b)?);
            render_bool(cli.json, "same_day", result)
        }
        Command::Holidays { year } => {
            let year = match year {
                Some(year) => *year,
                None => current_year(&*clock_from(cli.now.as_deref())?),
            };
            let holidays = named_holidays(year)?;
            if cli.json {
                Ok(serde_json::to_string_pretty(&holidays)?)
            } else {
                Ok(holidays
                    .iter()
                    .map(|h| format!("{}  {}", h.date.date_naive(), h.name))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Command::IsHoliday { datetime } => {
            let name = holiday_name(instant_arg("datetime", datetime)?);
            if cli.json {
                Ok(json!({ "holiday": name.is_some(), "name": name }).to_string())
            } else {
                Ok(name.is_some().to_string())
            }
        }
        Command::CurrentYear => {
            let year = current_year(&*clock_from(cli.now.as_deref())?);
            if cli.json {
                Ok(json!({ "year": year }).to_string())
            } else {
                Ok(year.to_string())
            }
        }
    }
}

/// The system clock, or a fixed one when `--now` is given.
fn clock_from(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(text) => Ok(Box::new(FixedClock(instant_arg("--now", text)?))),
        None => Ok(Box::new(SystemClock)),
    }
}

fn instant_arg(name: &str, text: &str) -> Result<Instant> {
    require_valid_instant(text).with_context(|| format!("invalid {name} argument"))
}

fn render_bool(as_json: bool, key: &str, value: bool) -> Result<String> {
    if as_json {
        let mut map = serde_json::Map::new();
        map.insert(key.to_string(), value.into());
        Ok(serde_json::Value::Object(map).to_string())
    } else {
        Ok(value.to_string())
    }
}
