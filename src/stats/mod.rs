//! Stats module - Metric engine over the loaded tables

mod analysis;
mod calculator;
mod report;
mod season;
mod tally;

pub use analysis::{Analysis, AnalysisOutput, AnalysisParams};
pub use calculator::{
    DominanceSummary, HeadToHead, StatsCalculator, TeamDominance, TossInfluence, WinRecord,
};
pub use report::{AnalysisReport, ReportError};
pub use season::{SeasonAward, SeasonBatter, SeasonBowler, SeasonFielder, SeasonLeaders};
