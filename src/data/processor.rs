//! Data Processor Module
//! Handles team-name normalization applied once at load time.

use super::records::MatchRecord;

/// Historical or retired franchise names mapped to their current canonical name.
///
/// No canonical name appears on the left-hand side, which keeps normalization idempotent.
pub const TEAM_ALIASES: [(&str, &str); 4] = [
    ("Royal Challengers Bengaluru", "Royal Challengers Bangalore"),
    ("Delhi Daredevils", "Delhi Capitals"),
    ("Kings XI Punjab", "Punjab Kings"),
    ("Rising Pune Supergiants", "Rising Pune Supergiant"),
];

/// Resolve a team name through the alias map. Unknown names pass through unchanged.
pub fn canonical_team(name: &str) -> &str {
    TEAM_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

/// Applies the alias map to every team-name column of the matches table.
pub struct DataProcessor;

impl DataProcessor {
    fn normalize_in_place(name: &mut String) {
        let canonical = canonical_team(name);
        if canonical != name.as_str() {
            *name = canonical.to_string();
        }
    }

    /// Normalize `team1`, `team2`, `toss_winner` and `winner` of one match.
    pub fn normalize_match(record: &mut MatchRecord) {
        Self::normalize_in_place(&mut record.team1);
        Self::normalize_in_place(&mut record.team2);
        Self::normalize_in_place(&mut record.toss_winner);
        if let Some(winner) = record.winner.as_mut() {
            Self::normalize_in_place(winner);
        }
    }

    /// Normalize every match of the table.
    pub fn normalize_matches(records: &mut [MatchRecord]) {
        records.iter_mut().for_each(Self::normalize_match);
    }
}
