pub mod extract;
pub mod raw_table;
pub mod select;
pub mod utils;

pub use extract::extract_tables;
pub use raw_table::RawTable;
pub use select::TableSelector;
