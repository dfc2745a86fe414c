// src/finals/dataset.rs

use anyhow::{ensure, Result};
use tracing::info;

use super::{
    aggregate::count_wins,
    clean::clean_finals,
    types::{FinalsRecord, WinCounts},
};

/// Cleaned finals plus the win counts derived from them.
///
/// Built once at startup and never mutated afterwards; the server shares it
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    finals: Vec<FinalsRecord>,
    wins: WinCounts,
}

impl Dataset {
    /// Clean `finals` and aggregate them.
    pub fn from_finals(mut finals: Vec<FinalsRecord>) -> Result<Self> {
        clean_finals(&mut finals);
        let wins = count_wins(&finals);
        ensure!(
            wins.total() as usize == finals.len(),
            "win counts ({}) do not cover all finals ({})",
            wins.total(),
            finals.len()
        );
        info!(finals = finals.len(), countries = wins.len(), "dataset ready");
        Ok(Self { finals, wins })
    }

    pub fn finals(&self) -> &[FinalsRecord] {
        &self.finals
    }

    pub fn wins(&self) -> &WinCounts {
        &self.wins
    }

    /// The final played in `year`, if any.
    pub fn final_of(&self, year: i32) -> Option<&FinalsRecord> {
        self.finals.iter().find(|r| r.year == year)
    }
}
