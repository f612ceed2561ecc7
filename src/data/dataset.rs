//! Dataset Module
//! The immutable, normalized pair of tables every metric reads from.

use super::processor::DataProcessor;
use super::records::{Delivery, MatchRecord};
use std::collections::{BTreeSet, HashMap};

/// Read-only data context handed to every metric function.
///
/// Built once per process. Team names are already canonical.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    matches: Vec<MatchRecord>,
    deliveries: Vec<Delivery>,
    /// Match id -> index into `matches`.
    match_index: HashMap<u64, usize>,
}

impl Dataset {
    /// Build a dataset, normalizing team names on the way in.
    pub fn new(mut matches: Vec<MatchRecord>, deliveries: Vec<Delivery>) -> Self {
        DataProcessor::normalize_matches(&mut matches);
        let match_index = matches
            .iter()
            .enumerate()
            .map(|(idx, m)| (m.id, idx))
            .collect();

        Self {
            matches,
            deliveries,
            match_index,
        }
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Every team appearing as `team1` or `team2`, sorted by name.
    pub fn teams(&self) -> Vec<&str> {
        self.matches
            .iter()
            .flat_map(|m| [m.team1.as_str(), m.team2.as_str()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct season labels, sorted.
    pub fn seasons(&self) -> Vec<&str> {
        self.matches
            .iter()
            .map(|m| m.season.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn season_of(&self, match_id: u64) -> Option<&str> {
        self.match_index
            .get(&match_id)
            .map(|&idx| self.matches[idx].season.as_str())
    }

    /// Deliveries joined to their match's season.
    ///
    /// Deliveries whose match id is absent from the matches table are dropped.
    pub fn deliveries_with_season(&self) -> impl Iterator<Item = (&str, &Delivery)> + '_ {
        self.deliveries
            .iter()
            .filter_map(|d| self.season_of(d.match_id).map(|season| (season, d)))
    }

    /// Count of deliveries that cannot be joined to a match.
    pub fn orphan_delivery_count(&self) -> usize {
        self.deliveries
            .iter()
            .filter(|d| !self.match_index.contains_key(&d.match_id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::records::MatchResult;

    fn fixture(id: u64, season: &str, team1: &str, team2: &str) -> MatchRecord {
        MatchRecord {
            id,
            season: season.to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            toss_winner: team1.to_string(),
            winner: None,
            result: MatchResult::NoResult,
            result_margin: None,
            player_of_match: None,
        }
    }

    fn ball(match_id: u64) -> Delivery {
        Delivery {
            match_id,
            batter: "A".to_string(),
            bowler: "B".to_string(),
            fielder: None,
            batsman_runs: 1,
            extras_type: None,
            is_wicket: false,
            dismissal_kind: None,
        }
    }

    #[test]
    fn teams_are_canonical_and_sorted() {
        let dataset = Dataset::new(
            vec![
                fixture(1, "2009", "Kings XI Punjab", "Mumbai Indians"),
                fixture(2, "2021", "Punjab Kings", "Chennai Super Kings"),
            ],
            Vec::new(),
        );
        assert_eq!(
            dataset.teams(),
            vec!["Chennai Super Kings", "Mumbai Indians", "Punjab Kings"]
        );
    }

    #[test]
    fn season_join_drops_orphans() {
        let dataset = Dataset::new(
            vec![fixture(1, "2009", "X", "Y"), fixture(2, "2007/08", "X", "Y")],
            vec![ball(1), ball(2), ball(99)],
        );
        let seasons: Vec<&str> = dataset.deliveries_with_season().map(|(s, _)| s).collect();
        assert_eq!(seasons, vec!["2009", "2007/08"]);
        assert_eq!(dataset.orphan_delivery_count(), 1);
        assert_eq!(dataset.seasons(), vec!["2007/08", "2009"]);
    }
}
