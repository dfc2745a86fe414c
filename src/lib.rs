pub mod callbacks;
pub mod config;
pub mod fetch;
pub mod finals;
pub mod server;
pub mod table;
pub mod ui;
