use super::types::FinalsRecord;

/// Labels the source uses for the pre-1990 German state.
const GERMANY_ALIASES: &[&str] = &["Germany FR", "West Germany"];
const GERMANY: &str = "Germany";

/// Single canonical name for a country label.
pub fn canonical_country(name: &str) -> &str {
    if GERMANY_ALIASES.contains(&name) {
        GERMANY
    } else {
        name
    }
}

/// Fold historical country labels into their canonical name, in place.
pub fn clean_finals(records: &mut [FinalsRecord]) {
    for rec in records {
        for name in [&mut rec.winner, &mut rec.runner_up] {
            let canonical = canonical_country(name);
            if canonical != name.as_str() {
                *name = canonical.to_string();
            }
        }
    }
}
