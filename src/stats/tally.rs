//! Group-by helpers shared by the metric functions.
//!
//! Every "pick the max per group" in this crate goes through [`pick_leader`], so all metrics
//! share one tie-break policy: highest score wins, equal scores go to the name that sorts
//! first (byte-wise ascending).

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Per-season accumulators keyed by player name. Seasons iterate in ascending order.
pub type SeasonTally<'a, V> = BTreeMap<&'a str, HashMap<&'a str, V>>;

/// Select the candidate with the highest score, ties broken by ascending name.
pub fn pick_leader<'a, V, K, F>(
    candidates: impl IntoIterator<Item = (&'a str, V)>,
    score: F,
) -> Option<(&'a str, V)>
where
    K: Ord,
    F: Fn(&V) -> K,
{
    candidates.into_iter().fold(None, |best, (name, value)| match best {
        None => Some((name, value)),
        Some((best_name, best_value)) => {
            let ordering = score(&value)
                .cmp(&score(&best_value))
                .then_with(|| best_name.cmp(name));
            if ordering == Ordering::Greater {
                Some((name, value))
            } else {
                Some((best_name, best_value))
            }
        }
    })
}

/// Sort rows by a floating value descending, ties by name ascending.
pub fn rank_descending<T>(rows: &mut [T], value: impl Fn(&T) -> f64, name: impl Fn(&T) -> &str) {
    rows.sort_by(|a, b| {
        value(b)
            .total_cmp(&value(a))
            .then_with(|| name(a).cmp(name(b)))
    });
}

/// Percentage of `part` in `whole`, `None` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
