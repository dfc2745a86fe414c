// src/config.rs

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::table::TableSelector;

/// Page holding the list of finals.
pub const SOURCE_URL: &str = "https://en.wikipedia.org/wiki/List_of_FIFA_World_Cup_finals";

/// Listen on all interfaces.
pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const PORT: u16 = 10000;
pub const DEBUG: bool = true;

/// Wikipedia answers 403 to clients without a user agent.
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (FIFA World Cup finals dashboard)"
);

pub const APP_TITLE: &str = "FIFA World Cup Dashboard";

/// Columns that identify the match-results table.
pub const RESULTS_COLUMNS: &[&str] = &["Year", "Winners", "Runners-up"];

/// Runtime settings. `Default` gives the hard-coded production values.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source_url: String,
    pub bind: SocketAddr,
    pub debug: bool,
    pub table: TableSelector,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            bind: SocketAddr::new(HOST, PORT),
            debug: DEBUG,
            table: TableSelector::results(),
        }
    }
}
