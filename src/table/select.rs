use anyhow::{bail, Result};
use std::fmt;
use tracing::debug;

use super::raw_table::RawTable;
use crate::config::RESULTS_COLUMNS;

/// How to pick one table out of all the tables on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSelector {
    /// First table whose headers include every listed column.
    Signature(Vec<String>),
    /// The n-th table in document order.
    Index(usize),
}

impl TableSelector {
    /// Match-results table of the finals page.
    pub fn results() -> Self {
        Self::Signature(RESULTS_COLUMNS.iter().map(|c| c.to_string()).collect())
    }

    pub fn select<'a>(&self, tables: &'a [RawTable]) -> Result<&'a RawTable> {
        let found = match self {
            Self::Signature(cols) => {
                let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
                tables
                    .iter()
                    .enumerate()
                    .find(|(_, t)| t.has_columns(&cols))
            }
            Self::Index(i) => tables.get(*i).map(|t| (*i, t)),
        };
        match found {
            Some((idx, table)) => {
                debug!(index = idx, rows = table.rows.len(), selector = %self, "selected table");
                Ok(table)
            }
            None => bail!("no table matching {} among {} tables", self, tables.len()),
        }
    }
}

impl fmt::Display for TableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature(cols) => write!(f, "columns [{}]", cols.join(", ")),
            Self::Index(i) => write!(f, "index {}", i),
        }
    }
}
