pub mod aggregate;
pub mod clean;
pub mod dataset;
pub mod parse;
pub mod types;

pub use aggregate::count_wins;
pub use clean::{canonical_country, clean_finals};
pub use dataset::Dataset;
pub use parse::parse_finals;
pub use types::{FinalsRecord, WinCount, WinCounts};
