use std::collections::HashMap;

use super::types::{FinalsRecord, WinCount, WinCounts};

/// Count finals won per country, most wins first.
///
/// Ties keep the order in which the countries first won, so the result is
/// the same on every run over the same table.
pub fn count_wins(records: &[FinalsRecord]) -> WinCounts {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<WinCount> = Vec::new();

    for rec in records {
        match index.get(rec.winner.as_str()) {
            Some(&i) => counts[i].wins += 1,
            None => {
                index.insert(&rec.winner, counts.len());
                counts.push(WinCount {
                    country: rec.winner.clone(),
                    wins: 1,
                });
            }
        }
    }

    // stable sort: ties stay in first-win order
    counts.sort_by(|a, b| b.wins.cmp(&a.wins));
    WinCounts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn finals(winners: &[&str]) -> Vec<FinalsRecord> {
        winners
            .iter()
            .enumerate()
            .map(|(i, w)| FinalsRecord {
                year: 1930 + i as i32 * 4,
                winner: w.to_string(),
                runner_up: "Netherlands".to_string(),
                extra: vec![],
            })
            .collect()
    }

    #[test]
    fn four_brazil_wins() {
        let wins = count_wins(&finals(&["Brazil", "Italy", "Brazil", "Brazil", "Brazil"]));
        assert_eq!(wins.get("Brazil"), Some(4));
        assert_eq!(wins.get("Italy"), Some(1));
        assert_eq!(wins.get("Spain"), None);
    }

    #[test]
    fn ordered_by_wins_then_first_win() {
        let wins = count_wins(&finals(&["Uruguay", "Italy", "Italy", "Uruguay", "England", "Brazil", "Brazil", "Brazil"]));
        let order: Vec<(&str, u32)> = wins.iter().map(|w| (w.country.as_str(), w.wins)).collect();
        assert_eq!(
            order,
            vec![("Brazil", 3), ("Uruguay", 2), ("Italy", 2), ("England", 1)]
        );
    }

    #[test]
    fn empty_table() {
        let wins = count_wins(&[]);
        assert!(wins.is_empty());
        assert_eq!(wins.total(), 0);
    }

    proptest! {
        #[test]
        fn wins_sum_to_finals(winners in prop::collection::vec("[A-E]", 0..40)) {
            let names: Vec<&str> = winners.iter().map(String::as_str).collect();
            let recs = finals(&names);
            let wins = count_wins(&recs);
            prop_assert_eq!(wins.total() as usize, recs.len());
            prop_assert!(wins.iter().all(|w| w.wins > 0));
            prop_assert_eq!(count_wins(&recs), wins);
        }
    }
}
