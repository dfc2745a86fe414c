// src/callbacks/handlers.rs

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::finals::Dataset;

/// Text for the country dropdown: how many times the country has won.
pub fn country_summary(data: &Dataset, selected: &Value) -> Result<String> {
    let country = match selected {
        Value::Null => return Ok(String::new()),
        Value::String(s) if s.is_empty() => return Ok(String::new()),
        Value::String(s) => s.as_str(),
        other => return Err(anyhow!("country selection must be a string, got {}", other)),
    };
    let wins = data
        .wins()
        .get(country)
        .ok_or_else(|| anyhow!("no win count for country {:?}", country))?;
    Ok(format!("{} has won the FIFA World Cup {} time(s).", country, wins))
}

/// Text for the year dropdown: winner and runner-up of that final.
pub fn year_summary(data: &Dataset, selected: &Value) -> Result<String> {
    let year = match selected {
        Value::Null => return Ok(String::new()),
        Value::String(s) if s.trim().is_empty() => return Ok(String::new()),
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| anyhow!("year selection {:?} is not a number", s))?,
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| anyhow!("year selection {} is not a valid year", n))?,
        other => return Err(anyhow!("year selection must be a number, got {}", other)),
    };
    let rec = data
        .final_of(year)
        .ok_or_else(|| anyhow!("no final played in {}", year))?;
    Ok(format!(
        "In {}, the winner was {} and the runner-up was {}.",
        year, rec.winner, rec.runner_up
    ))
}
