//! Statistics Calculator Module
//! Team-level metrics: toss influence, win rate, dominance and head-to-head records.

use super::tally::{percentage, rank_descending, round2};
use crate::data::{canonical_team, Dataset};
use serde::Serialize;
use statrs::statistics::Statistics;
use std::collections::HashMap;

/// How often winning the toss turned into winning the match, for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TossInfluence {
    pub team: String,
    pub toss_wins: usize,
    pub toss_and_match_wins: usize,
    /// Percentage rounded to two decimals.
    pub rate: f64,
}

/// Overall win rate of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRecord {
    pub team: String,
    pub played: usize,
    pub wins: usize,
    pub win_pct: f64,
}

/// Mean adjusted victory margin of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDominance {
    pub team: String,
    /// Wins that carry an adjusted margin and therefore feed the mean.
    pub wins_counted: usize,
    pub mean_adjusted_margin: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DominanceSummary {
    /// Sorted by mean descending.
    pub teams: Vec<TeamDominance>,
    pub most_dominant: Option<String>,
}

/// Wins for each side across all meetings of two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub team_a: String,
    pub team_b: String,
    /// Meetings found, including no-results.
    pub matches: usize,
    pub wins_a: usize,
    pub wins_b: usize,
}

/// Computes team-level metrics over a [`Dataset`].
pub struct StatsCalculator;

impl StatsCalculator {
    /// Toss-to-match conversion rate per team, highest first.
    ///
    /// Teams that never won a toss are left out.
    pub fn toss_influence(dataset: &Dataset) -> Vec<TossInfluence> {
        let mut rows: Vec<TossInfluence> = dataset
            .teams()
            .into_iter()
            .filter_map(|team| {
                let (toss_wins, converted) = dataset
                    .matches()
                    .iter()
                    .filter(|m| m.toss_winner == team)
                    .fold((0usize, 0usize), |(tosses, wins), m| {
                        (tosses + 1, wins + usize::from(m.won_by(team)))
                    });
                let rate = percentage(converted, toss_wins)?;
                Some(TossInfluence {
                    team: team.to_string(),
                    toss_wins,
                    toss_and_match_wins: converted,
                    rate: round2(rate),
                })
            })
            .collect();

        rank_descending(&mut rows, |r| r.rate, |r| r.team.as_str());
        rows
    }

    /// Share of all matches won by the toss winner. No-results count only in the denominator.
    pub fn overall_toss_win_rate(dataset: &Dataset) -> f64 {
        let matches = dataset.matches();
        let converted = matches
            .iter()
            .filter(|m| m.won_by(&m.toss_winner))
            .count();
        percentage(converted, matches.len()).map_or(0.0, round2)
    }

    /// Win percentage per team, highest first.
    pub fn win_percentage(dataset: &Dataset) -> Vec<WinRecord> {
        let mut played: HashMap<&str, usize> = HashMap::new();
        let mut wins: HashMap<&str, usize> = HashMap::new();
        for m in dataset.matches() {
            *played.entry(m.team1.as_str()).or_default() += 1;
            *played.entry(m.team2.as_str()).or_default() += 1;
            if let Some(winner) = &m.winner {
                *wins.entry(winner.as_str()).or_default() += 1;
            }
        }

        let mut rows: Vec<WinRecord> = played
            .into_iter()
            .filter_map(|(team, played)| {
                let won = wins.get(team).copied().unwrap_or(0);
                Some(WinRecord {
                    team: team.to_string(),
                    played,
                    wins: won,
                    win_pct: percentage(won, played)?,
                })
            })
            .collect();

        rank_descending(&mut rows, |r| r.win_pct, |r| r.team.as_str());
        rows
    }

    /// Mean adjusted margin per winning team, plus the team with the highest mean.
    ///
    /// Matches without a winner or without an adjusted margin are skipped.
    pub fn dominant_wins(dataset: &Dataset) -> DominanceSummary {
        let mut margins: HashMap<&str, Vec<f64>> = HashMap::new();
        for m in dataset.matches() {
            if let (Some(winner), Some(margin)) = (&m.winner, m.adjusted_margin()) {
                margins
                    .entry(winner.as_str())
                    .or_default()
                    .push(margin as f64);
            }
        }

        let mut teams: Vec<TeamDominance> = margins
            .into_iter()
            .map(|(team, values)| TeamDominance {
                team: team.to_string(),
                wins_counted: values.len(),
                mean_adjusted_margin: values.iter().mean(),
            })
            .collect();

        rank_descending(&mut teams, |t| t.mean_adjusted_margin, |t| t.team.as_str());
        let most_dominant = teams.first().map(|t| t.team.clone());
        DominanceSummary {
            teams,
            most_dominant,
        }
    }

    /// Wins for each side over every meeting of `team_a` and `team_b`, in either fixture order.
    ///
    /// Names go through the alias map first. Unknown teams simply produce zero counts.
    pub fn head_to_head(dataset: &Dataset, team_a: &str, team_b: &str) -> HeadToHead {
        let team_a = canonical_team(team_a.trim());
        let team_b = canonical_team(team_b.trim());

        let meetings = dataset.matches().iter().filter(|m| {
            (m.team1 == team_a && m.team2 == team_b) || (m.team1 == team_b && m.team2 == team_a)
        });

        let mut record = HeadToHead {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            matches: 0,
            wins_a: 0,
            wins_b: 0,
        };
        for m in meetings {
            record.matches += 1;
            if m.won_by(team_a) {
                record.wins_a += 1;
            } else if m.won_by(team_b) {
                record.wins_b += 1;
            }
        }
        record
    }
}
