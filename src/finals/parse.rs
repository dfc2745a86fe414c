// src/finals/parse.rs

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use tracing::{debug, info};

use super::types::FinalsRecord;
use crate::table::{utils::leading_year, RawTable};

const YEAR: &str = "Year";
const WINNERS: &str = "Winners";
const RUNNERS_UP: &str = "Runners-up";

/// Turn the raw results table into typed records.
///
/// Rows without a leading year (notes, footers) or without a winner
/// (finals not played yet) are skipped; a year seen twice means the page is
/// not the table we expect.
pub fn parse_finals(table: &RawTable) -> Result<Vec<FinalsRecord>> {
    let col = |name: &str| {
        table
            .column(name)
            .with_context(|| format!("results table has no `{}` column", name))
    };
    let year_idx = col(YEAR)?;
    let winner_idx = col(WINNERS)?;
    let runner_up_idx = col(RUNNERS_UP)?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(table.rows.len());

    for (i, row) in table.rows.iter().enumerate() {
        let Some(year) = row.get(year_idx).and_then(|c| leading_year(c)) else {
            debug!(row = i, "no year; skipping");
            continue;
        };
        let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
        let winner = cell(winner_idx);
        if winner.is_empty() {
            debug!(row = i, year, "no winner (not played yet); skipping");
            continue;
        }
        if !seen.insert(year) {
            bail!("year {} appears more than once in the results table", year);
        }

        let extra = table
            .headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| ![year_idx, winner_idx, runner_up_idx].contains(idx))
            .map(|(idx, h)| (h.clone(), cell(idx)))
            .collect();

        records.push(FinalsRecord {
            year,
            winner,
            runner_up: cell(runner_up_idx),
            extra,
        });
    }

    info!(finals = records.len(), "parsed finals");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn typed_rows_keep_other_columns() {
        let t = raw(
            &["Year", "Winners", "Score", "Runners-up", "Venue"],
            &[
                &["1930", "Uruguay", "4–2", "Argentina", "Estadio Centenario"],
                &["Notes", "", "", "", ""],
                &["1934", "Italy", "2–1 (a.e.t.)", "Czechoslovakia", "Stadio Nazionale PNF"],
            ],
        );
        let recs = parse_finals(&t).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].year, 1930);
        assert_eq!(recs[0].winner, "Uruguay");
        assert_eq!(recs[0].runner_up, "Argentina");
        assert_eq!(
            recs[0].extra,
            vec![
                ("Score".to_string(), "4–2".to_string()),
                ("Venue".to_string(), "Estadio Centenario".to_string()),
            ]
        );
        assert_eq!(recs[1].year, 1934);
    }

    #[test]
    fn unplayed_final_is_skipped() {
        let t = raw(
            &["Year", "Winners", "Score", "Runners-up"],
            &[
                &["2018", "France", "4–2", "Croatia"],
                &["2022", "Argentina", "3–3 (a.e.t.) (4–2 p)", "France"],
                &["2026", "", "", ""],
            ],
        );
        let recs = parse_finals(&t).unwrap();
        let years: Vec<i32> = recs.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2018, 2022]);
        assert!(recs.iter().all(|r| !r.winner.is_empty()));

        let wins = crate::finals::count_wins(&recs);
        assert_eq!(wins.len(), 2);
        assert_eq!(wins.get(""), None);
    }

    #[test]
    fn missing_column_is_error() {
        let t = raw(&["Year", "Winners"], &[&["1930", "Uruguay"]]);
        let err = parse_finals(&t).unwrap_err();
        assert!(err.to_string().contains("Runners-up"));
    }

    #[test]
    fn duplicate_year_is_error() {
        let t = raw(
            &["Year", "Winners", "Runners-up"],
            &[&["1930", "Uruguay", "Argentina"], &["1930", "Italy", "Hungary"]],
        );
        assert!(parse_finals(&t).is_err());
    }
}
