// src/ui/layout.rs

use serde_json::json;

use super::figure::choropleth;
use super::node::{DropdownOption, Node};
use crate::config::APP_TITLE;
use crate::finals::Dataset;

pub const CHOROPLETH_MAP: &str = "choropleth-map";
pub const COUNTRY_DROPDOWN: &str = "country-dropdown";
pub const COUNTRY_OUTPUT: &str = "country-output";
pub const YEAR_DROPDOWN: &str = "year-dropdown";
pub const YEAR_OUTPUT: &str = "year-output";

/// The whole dashboard. Built once at startup.
pub fn build_layout(data: &Dataset) -> Node {
    let countries = data
        .wins()
        .iter()
        .map(|w| DropdownOption {
            label: w.country.clone(),
            value: json!(w.country),
        })
        .collect();

    // one option per final; years are unique so no dedup
    let years = data
        .finals()
        .iter()
        .map(|f| DropdownOption {
            label: f.year.to_string(),
            value: json!(f.year),
        })
        .collect();

    Node::div(vec![
        Node::heading(1, APP_TITLE).with_style(&[("text-align", "center")]),
        Node::Graph {
            id: CHOROPLETH_MAP.to_string(),
            figure: choropleth(data.wins()),
        },
        Node::Break,
        Node::heading(2, "Select a Country to View Win Count"),
        Node::Dropdown {
            id: COUNTRY_DROPDOWN.to_string(),
            options: countries,
            placeholder: "Select a country".to_string(),
        },
        Node::output(COUNTRY_OUTPUT),
        Node::Break,
        Node::heading(2, "Select a Year to View Winner and Runner-up"),
        Node::Dropdown {
            id: YEAR_DROPDOWN.to_string(),
            options: years,
            placeholder: "Select a year".to_string(),
        },
        Node::output(YEAR_OUTPUT),
    ])
}
