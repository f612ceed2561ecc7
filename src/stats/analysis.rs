//! Analysis Selection Module
//! The eight named analyses offered by the dashboard and their dispatch to one metric each.

use super::calculator::{DominanceSummary, HeadToHead, StatsCalculator, TossInfluence, WinRecord};
use super::season::{SeasonAward, SeasonBatter, SeasonBowler, SeasonFielder, SeasonLeaders};
use crate::data::Dataset;
use serde::Serialize;

/// Analysis sections in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Analysis {
    #[default]
    TossWin,
    WinPercentage,
    DominantWins,
    TopMotm,
    TopBatsmen,
    TopWicketTakers,
    TopCatchTakers,
    HeadToHead,
}

impl Analysis {
    pub const ALL: [Analysis; 8] = [
        Analysis::TossWin,
        Analysis::WinPercentage,
        Analysis::DominantWins,
        Analysis::TopMotm,
        Analysis::TopBatsmen,
        Analysis::TopWicketTakers,
        Analysis::TopCatchTakers,
        Analysis::HeadToHead,
    ];

    /// Label shown in the analysis selector.
    pub fn label(self) -> &'static str {
        match self {
            Analysis::TossWin => "Toss Win %",
            Analysis::WinPercentage => "Win %",
            Analysis::DominantWins => "Dominant Wins",
            Analysis::TopMotm => "Top MOTM Winners",
            Analysis::TopBatsmen => "Top Batsmen",
            Analysis::TopWicketTakers => "Top Wicket Takers",
            Analysis::TopCatchTakers => "Top Catch Takers",
            Analysis::HeadToHead => "Head-to-Head",
        }
    }

    /// Section heading shown above the result.
    pub fn heading(self) -> &'static str {
        match self {
            Analysis::TossWin => "Toss Win → Match Win %",
            Analysis::WinPercentage => "Win Percentage of Each Team",
            Analysis::DominantWins => "Dominant Wins per Team",
            Analysis::TopMotm => "Top MOTM Winners per Season",
            Analysis::TopBatsmen => "Top Batsmen and Their Strike Rates",
            Analysis::TopWicketTakers => "Top Wicket Takers per Season",
            Analysis::TopCatchTakers => "Top Catch Takers per Season",
            Analysis::HeadToHead => "Head-to-Head Stats",
        }
    }

    pub fn needs_teams(self) -> bool {
        self == Analysis::HeadToHead
    }

    /// Run the single metric behind this analysis.
    pub fn run(self, dataset: &Dataset, params: &AnalysisParams) -> AnalysisOutput {
        match self {
            Analysis::TossWin => AnalysisOutput::TossWin {
                teams: StatsCalculator::toss_influence(dataset),
                overall_rate: StatsCalculator::overall_toss_win_rate(dataset),
            },
            Analysis::WinPercentage => {
                AnalysisOutput::WinPercentage(StatsCalculator::win_percentage(dataset))
            }
            Analysis::DominantWins => {
                AnalysisOutput::DominantWins(StatsCalculator::dominant_wins(dataset))
            }
            Analysis::TopMotm => AnalysisOutput::TopMotm(SeasonLeaders::top_motm(dataset)),
            Analysis::TopBatsmen => AnalysisOutput::TopBatsmen(SeasonLeaders::top_batsmen(dataset)),
            Analysis::TopWicketTakers => {
                AnalysisOutput::TopWicketTakers(SeasonLeaders::top_wicket_takers(dataset))
            }
            Analysis::TopCatchTakers => {
                AnalysisOutput::TopCatchTakers(SeasonLeaders::top_catch_takers(dataset))
            }
            Analysis::HeadToHead => AnalysisOutput::HeadToHead(StatsCalculator::head_to_head(
                dataset,
                &params.team_a,
                &params.team_b,
            )),
        }
    }
}

/// Extra inputs. Only head-to-head reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisParams {
    pub team_a: String,
    pub team_b: String,
}

/// Result of one analysis, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "analysis", content = "data", rename_all = "snake_case")]
pub enum AnalysisOutput {
    TossWin {
        teams: Vec<TossInfluence>,
        overall_rate: f64,
    },
    WinPercentage(Vec<WinRecord>),
    DominantWins(DominanceSummary),
    TopMotm(Vec<SeasonAward>),
    TopBatsmen(Vec<SeasonBatter>),
    TopWicketTakers(Vec<SeasonBowler>),
    TopCatchTakers(Vec<SeasonFielder>),
    HeadToHead(HeadToHead),
}

impl AnalysisOutput {
    /// Whether the metric's filters matched nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            AnalysisOutput::TossWin { teams, .. } => teams.is_empty(),
            AnalysisOutput::WinPercentage(rows) => rows.is_empty(),
            AnalysisOutput::DominantWins(summary) => summary.teams.is_empty(),
            AnalysisOutput::TopMotm(rows) => rows.is_empty(),
            AnalysisOutput::TopBatsmen(rows) => rows.is_empty(),
            AnalysisOutput::TopWicketTakers(rows) => rows.is_empty(),
            AnalysisOutput::TopCatchTakers(rows) => rows.is_empty(),
            AnalysisOutput::HeadToHead(record) => record.matches == 0,
        }
    }

    /// (team, value) pairs for the ranked team metrics, used by the bar chart.
    pub fn team_series(&self) -> Option<Vec<(String, f64)>> {
        match self {
            AnalysisOutput::TossWin { teams, .. } => {
                Some(teams.iter().map(|r| (r.team.clone(), r.rate)).collect())
            }
            AnalysisOutput::WinPercentage(rows) => {
                Some(rows.iter().map(|r| (r.team.clone(), r.win_pct)).collect())
            }
            AnalysisOutput::DominantWins(summary) => Some(
                summary
                    .teams
                    .iter()
                    .map(|t| (t.team.clone(), t.mean_adjusted_margin))
                    .collect(),
            ),
            _ => None,
        }
    }
}
