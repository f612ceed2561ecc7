//! Season Leaders Module
//! Per-season award, batting, bowling and fielding leaders.

use super::tally::{pick_leader, SeasonTally};
use crate::data::Dataset;
use serde::Serialize;

/// Player with the most player-of-the-match awards in a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonAward {
    pub season: String,
    pub player: String,
    pub count: u32,
}

/// Leading run scorer of a season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonBatter {
    pub season: String,
    pub batter: String,
    pub runs: u32,
    pub balls_faced: u32,
    /// Runs per 100 balls faced.
    pub strike_rate: f64,
}

/// Leading wicket taker of a season. Run-outs are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonBowler {
    pub season: String,
    pub bowler: String,
    pub wickets: u32,
}

/// Leading catcher of a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonFielder {
    pub season: String,
    pub fielder: String,
    pub catches: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct BattingLine {
    runs: u32,
    balls: u32,
}

/// Computes per-season leaders. Every output is ordered by season ascending.
pub struct SeasonLeaders;

impl SeasonLeaders {
    /// Most player-of-the-match awards per season.
    pub fn top_motm(dataset: &Dataset) -> Vec<SeasonAward> {
        let mut tally: SeasonTally<u32> = SeasonTally::new();
        for m in dataset.matches() {
            let season = tally.entry(m.season.as_str()).or_default();
            if let Some(player) = &m.player_of_match {
                *season.entry(player.as_str()).or_default() += 1;
            }
        }

        tally
            .into_iter()
            .filter_map(|(season, players)| {
                let (player, count) = pick_leader(players, |count| *count)?;
                Some(SeasonAward {
                    season: season.to_string(),
                    player: player.to_string(),
                    count,
                })
            })
            .collect()
    }

    /// Highest run scorer per season, with balls faced and strike rate.
    ///
    /// Wides do not count as balls faced. A batter with runs but no faced ball is not eligible.
    pub fn top_batsmen(dataset: &Dataset) -> Vec<SeasonBatter> {
        let mut tally: SeasonTally<BattingLine> = SeasonTally::new();
        for (season, ball) in dataset.deliveries_with_season() {
            let line = tally
                .entry(season)
                .or_default()
                .entry(ball.batter.as_str())
                .or_default();
            line.runs += ball.batsman_runs;
            if ball.is_faced_ball() {
                line.balls += 1;
            }
        }

        tally
            .into_iter()
            .filter_map(|(season, batters)| {
                let eligible = batters.into_iter().filter(|(_, line)| line.balls > 0);
                let (batter, line) = pick_leader(eligible, |line| line.runs)?;
                Some(SeasonBatter {
                    season: season.to_string(),
                    batter: batter.to_string(),
                    runs: line.runs,
                    balls_faced: line.balls,
                    strike_rate: f64::from(line.runs) / f64::from(line.balls) * 100.0,
                })
            })
            .collect()
    }

    /// Most bowler-credited wickets per season.
    pub fn top_wicket_takers(dataset: &Dataset) -> Vec<SeasonBowler> {
        let mut tally: SeasonTally<u32> = SeasonTally::new();
        for (season, ball) in dataset.deliveries_with_season() {
            if ball.is_bowler_wicket() {
                *tally
                    .entry(season)
                    .or_default()
                    .entry(ball.bowler.as_str())
                    .or_default() += 1;
            }
        }

        tally
            .into_iter()
            .filter_map(|(season, bowlers)| {
                let (bowler, wickets) = pick_leader(bowlers, |count| *count)?;
                Some(SeasonBowler {
                    season: season.to_string(),
                    bowler: bowler.to_string(),
                    wickets,
                })
            })
            .collect()
    }

    /// Most catches per season. Caught-and-bowled is a bowling dismissal and is not counted.
    pub fn top_catch_takers(dataset: &Dataset) -> Vec<SeasonFielder> {
        let mut tally: SeasonTally<u32> = SeasonTally::new();
        for (season, ball) in dataset.deliveries_with_season() {
            if let (true, Some(fielder)) = (ball.is_catch(), &ball.fielder) {
                *tally
                    .entry(season)
                    .or_default()
                    .entry(fielder.as_str())
                    .or_default() += 1;
            }
        }

        tally
            .into_iter()
            .filter_map(|(season, fielders)| {
                let (fielder, catches) = pick_leader(fielders, |count| *count)?;
                Some(SeasonFielder {
                    season: season.to_string(),
                    fielder: fielder.to_string(),
                    catches,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Delivery, DismissalKind, ExtrasType, MatchRecord, MatchResult};

    fn fixture(id: u64, season: &str, motm: &str) -> MatchRecord {
        MatchRecord {
            id,
            season: season.to_string(),
            team1: "X".to_string(),
            team2: "Y".to_string(),
            toss_winner: "X".to_string(),
            winner: Some("X".to_string()),
            result: MatchResult::Runs,
            result_margin: Some(5),
            player_of_match: Some(motm.to_string()),
        }
    }

    fn ball(match_id: u64, batter: &str, bowler: &str, runs: u32) -> Delivery {
        Delivery {
            match_id,
            batter: batter.to_string(),
            bowler: bowler.to_string(),
            fielder: None,
            batsman_runs: runs,
            extras_type: None,
            is_wicket: false,
            dismissal_kind: None,
        }
    }

    fn wide(match_id: u64, batter: &str, bowler: &str) -> Delivery {
        Delivery {
            extras_type: Some(ExtrasType::Wides),
            ..ball(match_id, batter, bowler, 0)
        }
    }

    fn dismissal(match_id: u64, bowler: &str, kind: &str, fielder: Option<&str>) -> Delivery {
        Delivery {
            is_wicket: true,
            dismissal_kind: Some(DismissalKind::parse(kind)),
            fielder: fielder.map(str::to_string),
            ..ball(match_id, "Out", bowler, 0)
        }
    }

    #[test]
    fn motm_leader_per_season_with_alphabetical_ties() {
        let dataset = Dataset::new(
            vec![
                fixture(1, "2008", "SE Marsh"),
                fixture(2, "2008", "SE Marsh"),
                fixture(3, "2008", "YK Pathan"),
                fixture(4, "2009", "YK Pathan"),
                fixture(5, "2009", "A Kumble"),
            ],
            Vec::new(),
        );

        let rows = SeasonLeaders::top_motm(&dataset);
        assert_eq!(rows.len(), dataset.seasons().len());
        assert_eq!((rows[0].player.as_str(), rows[0].count), ("SE Marsh", 2));
        assert_eq!((rows[1].player.as_str(), rows[1].count), ("A Kumble", 1));
    }

    #[test]
    fn batsman_strike_rate_excludes_wides() {
        let dataset = Dataset::new(
            vec![fixture(1, "2016", "V Kohli"), fixture(2, "2017", "DA Warner")],
            vec![
                ball(1, "V Kohli", "B1", 6),
                ball(1, "V Kohli", "B1", 4),
                wide(1, "V Kohli", "B1"),
                ball(1, "AB de Villiers", "B1", 1),
                ball(2, "DA Warner", "B2", 2),
                ball(2, "DA Warner", "B2", 0),
            ],
        );

        let rows = SeasonLeaders::top_batsmen(&dataset);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].batter, "V Kohli");
        assert_eq!((rows[0].runs, rows[0].balls_faced), (10, 2));
        assert!((rows[0].strike_rate - 500.0).abs() < 1e-9);
        assert_eq!(rows[1].batter, "DA Warner");
        for row in &rows {
            assert!(row.balls_faced > 0);
            let expected = f64::from(row.runs) / f64::from(row.balls_faced) * 100.0;
            assert!((row.strike_rate - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn batters_who_only_received_wides_are_not_eligible() {
        let dataset = Dataset::new(
            vec![fixture(1, "2018", "AT Rayudu"), fixture(2, "2019", "AD Russell")],
            vec![
                Delivery {
                    batsman_runs: 4,
                    ..wide(1, "AA Wide", "B1")
                },
                ball(1, "SK Raina", "B1", 0),
                wide(2, "KD Karthik", "B2"),
            ],
        );

        let rows = SeasonLeaders::top_batsmen(&dataset);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].season, "2018");
        assert_eq!(rows[0].batter, "SK Raina");
        assert_eq!((rows[0].runs, rows[0].balls_faced), (0, 1));
        assert_eq!(rows[0].strike_rate, 0.0);
    }

    #[test]
    fn run_outs_do_not_count_for_bowlers() {
        let dataset = Dataset::new(
            vec![fixture(1, "2019", "P1")],
            vec![
                dismissal(1, "Bumrah", "caught", Some("Pollard")),
                dismissal(1, "Rabada", "bowled", None),
                dismissal(1, "Rabada", "run out", Some("Pant")),
                dismissal(1, "Rabada", "run_out", Some("Pant")),
            ],
        );

        let rows = SeasonLeaders::top_wicket_takers(&dataset);
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].bowler.as_str(), rows[0].wickets), ("Bumrah", 1));
    }

    #[test]
    fn catches_count_only_caught_dismissals() {
        let dataset = Dataset::new(
            vec![fixture(1, "2019", "P1"), fixture(2, "2020", "P2")],
            vec![
                dismissal(1, "B", "caught", Some("Pollard")),
                dismissal(1, "B", "caught", Some("Pollard")),
                dismissal(1, "B", "caught and bowled", Some("B")),
                dismissal(1, "B", "caught", Some("Dhoni")),
                dismissal(2, "B", "caught", None),
            ],
        );

        let rows = SeasonLeaders::top_catch_takers(&dataset);
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].fielder.as_str(), rows[0].catches), ("Pollard", 2));
    }

    #[test]
    fn empty_tables_give_empty_leaders() {
        let dataset = Dataset::default();
        assert!(SeasonLeaders::top_motm(&dataset).is_empty());
        assert!(SeasonLeaders::top_batsmen(&dataset).is_empty());
        assert!(SeasonLeaders::top_wicket_takers(&dataset).is_empty());
        assert!(SeasonLeaders::top_catch_takers(&dataset).is_empty());
    }
}
