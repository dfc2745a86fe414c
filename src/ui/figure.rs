use serde_json::{json, Value};

use crate::finals::WinCounts;

pub const MAP_TITLE: &str = "Total World Cup Wins by Country";
const COLOR_SCALE: &str = "Blues";

/// Plotly choropleth of wins, keyed by country name.
pub fn choropleth(wins: &WinCounts) -> Value {
    let (locations, z): (Vec<&str>, Vec<u32>) =
        wins.iter().map(|w| (w.country.as_str(), w.wins)).unzip();

    json!({
        "data": [{
            "type": "choropleth",
            "locations": locations,
            "locationmode": "country names",
            "z": z,
            "colorscale": COLOR_SCALE,
            "reversescale": false,
            "colorbar": { "title": { "text": "Wins" } },
            "hovertemplate": "Country=%{location}<br>Wins=%{z}<extra></extra>"
        }],
        "layout": {
            "title": { "text": MAP_TITLE },
            "geo": { "showframe": false, "showcoastlines": true },
            "margin": { "t": 60, "l": 0, "r": 0, "b": 0 }
        }
    })
}
