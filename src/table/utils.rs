use once_cell::sync::Lazy;
use regex::Regex;

static FOOTNOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalise the text of one table cell:
///  - drop footnote markers such as `[1]` or `[n 3]`
///  - turn non-breaking spaces into plain ones
///  - collapse runs of whitespace and trim
pub fn clean_cell(raw: &str) -> String {
    let text = FOOTNOTE.replace_all(raw, "");
    let text = text.replace('\u{a0}', " ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Leading four-digit year of a cell like `1930` or `1950 (final round)`.
pub fn leading_year(cell: &str) -> Option<i32> {
    let digits: String = cell.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}
