//! Typed Records Module
//! Match-level and ball-by-ball rows as loaded from the two source tables.

use serde::Serialize;

/// Multiplier applied to by-wickets margins before they are averaged with by-runs margins.
///
/// This is a heuristic that puts both margin kinds on a roughly comparable scale.
/// It is not a unit conversion between wickets and runs.
pub const WICKET_MARGIN_WEIGHT: u64 = 10;

/// How a match was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    /// Team batting first won; margin is in runs.
    Runs,
    /// Team chasing won; margin is in wickets.
    Wickets,
    Tie,
    NoResult,
    Other,
}

impl MatchResult {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "runs" => MatchResult::Runs,
            "wickets" => MatchResult::Wickets,
            "tie" => MatchResult::Tie,
            "no result" | "no_result" => MatchResult::NoResult,
            _ => MatchResult::Other,
        }
    }
}

/// One row of the matches table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub id: u64,
    pub season: String,
    pub team1: String,
    pub team2: String,
    pub toss_winner: String,
    pub winner: Option<String>,
    pub result: MatchResult,
    pub result_margin: Option<u32>,
    pub player_of_match: Option<String>,
}

impl MatchRecord {
    /// Victory margin on the combined runs scale, see [`WICKET_MARGIN_WEIGHT`].
    ///
    /// `None` for ties, no-results and rows without a recorded margin.
    pub fn adjusted_margin(&self) -> Option<u64> {
        let margin = u64::from(self.result_margin?);
        match self.result {
            MatchResult::Runs => Some(margin),
            MatchResult::Wickets => Some(margin * WICKET_MARGIN_WEIGHT),
            _ => None,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    pub fn won_by(&self, team: &str) -> bool {
        self.winner.as_deref() == Some(team)
    }
}

/// Extras recorded against a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExtrasType {
    Wides,
    NoBalls,
    Byes,
    LegByes,
    Penalty,
    Other(String),
}

impl ExtrasType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "wides" => ExtrasType::Wides,
            "noballs" => ExtrasType::NoBalls,
            "byes" => ExtrasType::Byes,
            "legbyes" => ExtrasType::LegByes,
            "penalty" => ExtrasType::Penalty,
            other => ExtrasType::Other(other.to_string()),
        }
    }
}

/// How a batter was dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DismissalKind {
    Caught,
    CaughtAndBowled,
    Bowled,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    RetiredHurt,
    RetiredOut,
    ObstructingTheField,
    Other(String),
}

impl DismissalKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "caught" => DismissalKind::Caught,
            "caught and bowled" => DismissalKind::CaughtAndBowled,
            "bowled" => DismissalKind::Bowled,
            "lbw" => DismissalKind::Lbw,
            "run out" | "run_out" => DismissalKind::RunOut,
            "stumped" => DismissalKind::Stumped,
            "hit wicket" => DismissalKind::HitWicket,
            "retired hurt" => DismissalKind::RetiredHurt,
            "retired out" => DismissalKind::RetiredOut,
            "obstructing the field" => DismissalKind::ObstructingTheField,
            other => DismissalKind::Other(other.to_string()),
        }
    }

    /// Whether the bowler is credited with the wicket. Run-outs never are.
    pub fn credited_to_bowler(&self) -> bool {
        !matches!(self, DismissalKind::RunOut)
    }
}

/// One row of the deliveries table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    pub match_id: u64,
    pub batter: String,
    pub bowler: String,
    pub fielder: Option<String>,
    pub batsman_runs: u32,
    pub extras_type: Option<ExtrasType>,
    pub is_wicket: bool,
    pub dismissal_kind: Option<DismissalKind>,
}

impl Delivery {
    /// Wides are not counted as balls faced by the batter.
    pub fn is_faced_ball(&self) -> bool {
        self.extras_type != Some(ExtrasType::Wides)
    }

    /// Wicket that goes into the bowler's tally.
    pub fn is_bowler_wicket(&self) -> bool {
        self.is_wicket
            && self
                .dismissal_kind
                .as_ref()
                .map_or(true, DismissalKind::credited_to_bowler)
    }

    pub fn is_catch(&self) -> bool {
        self.dismissal_kind == Some(DismissalKind::Caught)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(result: MatchResult, margin: Option<u32>) -> MatchRecord {
        MatchRecord {
            id: 1,
            season: "2020".to_string(),
            team1: "X".to_string(),
            team2: "Y".to_string(),
            toss_winner: "X".to_string(),
            winner: Some("X".to_string()),
            result,
            result_margin: margin,
            player_of_match: None,
        }
    }

    #[test]
    fn wicket_margins_are_scaled_by_ten() {
        assert_eq!(finished(MatchResult::Wickets, Some(7)).adjusted_margin(), Some(70));
        assert_eq!(finished(MatchResult::Runs, Some(7)).adjusted_margin(), Some(7));
    }

    #[test]
    fn largest_wicket_margin_scales_without_overflow() {
        assert_eq!(
            finished(MatchResult::Wickets, Some(u32::MAX)).adjusted_margin(),
            Some(u64::from(u32::MAX) * 10)
        );
    }

    #[test]
    fn ties_and_missing_margins_have_no_adjusted_margin() {
        assert_eq!(finished(MatchResult::Tie, Some(0)).adjusted_margin(), None);
        assert_eq!(finished(MatchResult::Runs, None).adjusted_margin(), None);
    }

    #[test]
    fn run_outs_are_not_bowler_wickets() {
        let mut ball = Delivery {
            match_id: 1,
            batter: "A".to_string(),
            bowler: "B".to_string(),
            fielder: Some("C".to_string()),
            batsman_runs: 0,
            extras_type: None,
            is_wicket: true,
            dismissal_kind: Some(DismissalKind::parse("run out")),
        };
        assert!(!ball.is_bowler_wicket());

        ball.dismissal_kind = Some(DismissalKind::parse("caught"));
        assert!(ball.is_bowler_wicket());
        assert!(ball.is_catch());
    }
}
