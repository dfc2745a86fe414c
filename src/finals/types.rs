// src/finals/types.rs

use serde::Serialize;

/// One World Cup final.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct FinalsRecord {
    pub year: i32,
    pub winner: String,
    pub runner_up: String,
    /// Remaining source columns (score, venue, ...) as `(header, value)`.
    pub extra: Vec<(String, String)>,
}

/// Number of finals won by one country.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct WinCount {
    pub country: String,
    pub wins: u32,
}

/// Win counts, most wins first.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct WinCounts(pub(crate) Vec<WinCount>);

impl WinCounts {
    pub fn get(&self, country: &str) -> Option<u32> {
        self.0.iter().find(|w| w.country == country).map(|w| w.wins)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WinCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all wins; equals the number of finals counted.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|w| w.wins).sum()
    }
}
