//! Full Report Module
//! Every metric computed in one pass and exported as JSON.

use super::calculator::{DominanceSummary, StatsCalculator, TossInfluence, WinRecord};
use super::season::{SeasonAward, SeasonBatter, SeasonBowler, SeasonFielder, SeasonLeaders};
use crate::data::Dataset;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// All team and season metrics of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub matches: usize,
    pub deliveries: usize,
    pub seasons: Vec<String>,
    pub toss_influence: Vec<TossInfluence>,
    pub overall_toss_win_rate: f64,
    pub win_percentage: Vec<WinRecord>,
    pub dominance: DominanceSummary,
    pub top_motm: Vec<SeasonAward>,
    pub top_batsmen: Vec<SeasonBatter>,
    pub top_wicket_takers: Vec<SeasonBowler>,
    pub top_catch_takers: Vec<SeasonFielder>,
}

impl AnalysisReport {
    /// Compute every metric. Team metrics and the delivery-based season metrics run in parallel.
    pub fn build(dataset: &Dataset) -> Self {
        let (team_metrics, season_metrics) = rayon::join(
            || {
                (
                    StatsCalculator::toss_influence(dataset),
                    StatsCalculator::overall_toss_win_rate(dataset),
                    StatsCalculator::win_percentage(dataset),
                    StatsCalculator::dominant_wins(dataset),
                    SeasonLeaders::top_motm(dataset),
                )
            },
            || {
                let (top_batsmen, (top_wicket_takers, top_catch_takers)) = rayon::join(
                    || SeasonLeaders::top_batsmen(dataset),
                    || {
                        rayon::join(
                            || SeasonLeaders::top_wicket_takers(dataset),
                            || SeasonLeaders::top_catch_takers(dataset),
                        )
                    },
                );
                (top_batsmen, top_wicket_takers, top_catch_takers)
            },
        );
        let (toss_influence, overall_toss_win_rate, win_percentage, dominance, top_motm) =
            team_metrics;
        let (top_batsmen, top_wicket_takers, top_catch_takers) = season_metrics;

        Self {
            matches: dataset.matches().len(),
            deliveries: dataset.deliveries().len(),
            seasons: dataset.seasons().into_iter().map(str::to_string).collect(),
            toss_influence,
            overall_toss_win_rate,
            win_percentage,
            dominance,
            top_motm,
            top_batsmen,
            top_wicket_takers,
            top_catch_takers,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        info!(path = %path.display(), "Report exported");
        Ok(())
    }
}
