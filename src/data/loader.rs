//! CSV Data Loader Module
//! Handles loading of the matches and deliveries tables using Polars.

use super::dataset::Dataset;
use super::processor::DataProcessor;
use super::records::{Delivery, DismissalKind, ExtrasType, MatchRecord, MatchResult};
use polars::prelude::*;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Which of the two source tables an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Matches,
    Deliveries,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Matches => write!(f, "matches"),
            Table::Deliveries => write!(f, "deliveries"),
        }
    }
}

/// Source data is missing or malformed. Fatal: no metric can run without both tables.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{table} source not found: {}", .path.display())]
    Missing { table: Table, path: PathBuf },
    #[error("Failed to load {table} CSV: {source}")]
    Csv {
        table: Table,
        #[source]
        source: PolarsError,
    },
    #[error("{table} table is missing required column `{column}`")]
    MissingColumn { table: Table, column: &'static str },
    #[error("{table} row {row}: {reason}")]
    MalformedRow {
        table: Table,
        row: usize,
        reason: String,
    },
}

/// Locations of the two delimited-text tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub matches: PathBuf,
    pub deliveries: PathBuf,
}

impl DataSources {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            matches: dir.join("matches.csv"),
            deliveries: dir.join("deliveries.csv"),
        }
    }
}

pub const MATCH_COLUMNS: [&str; 9] = [
    "id",
    "season",
    "team1",
    "team2",
    "toss_winner",
    "winner",
    "result",
    "result_margin",
    "player_of_match",
];

pub const DELIVERY_COLUMNS: [&str; 8] = [
    "match_id",
    "batter",
    "bowler",
    "batsman_runs",
    "extras_type",
    "is_wicket",
    "dismissal_kind",
    "fielder",
];

/// Reads both tables and turns them into a [`Dataset`].
pub struct DataLoader;

impl DataLoader {
    /// Load, normalize and validate both tables.
    pub fn load(sources: &DataSources) -> Result<Dataset, LoaderError> {
        info!(
            matches = %sources.matches.display(),
            deliveries = %sources.deliveries.display(),
            "Loading data sources"
        );

        let match_df = Self::read_table(Table::Matches, &sources.matches)?;
        let matches = Self::matches_from_frame(&match_df)?;
        let delivery_df = Self::read_table(Table::Deliveries, &sources.deliveries)?;
        let deliveries = Self::deliveries_from_frame(&delivery_df)?;

        let dataset = Dataset::new(matches, deliveries);
        let orphans = dataset.orphan_delivery_count();
        if orphans > 0 {
            debug!(orphans, "Deliveries without a known match id are excluded from season metrics");
        }
        info!(
            matches = dataset.matches().len(),
            deliveries = dataset.deliveries().len(),
            teams = dataset.teams().len(),
            seasons = dataset.seasons().len(),
            "Dataset ready"
        );
        Ok(dataset)
    }

    /// Read one CSV file into a DataFrame. `NA` and empty cells become null.
    pub fn read_table(table: Table, path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::Missing {
                table,
                path: path.to_path_buf(),
            });
        }

        // Full-file inference: season labels may switch from "2009" to "2009/10" deep in the file
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .with_null_values(Some(NullValues::AllColumnsSingle("NA".into())))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| LoaderError::Csv { table, source })
    }

    /// Convert a matches DataFrame into typed, normalized records.
    pub fn matches_from_frame(df: &DataFrame) -> Result<Vec<MatchRecord>, LoaderError> {
        let table = Table::Matches;
        let columns = MatchColumns::extract(df)?;
        let mut seen = HashSet::with_capacity(df.height());
        let mut records = Vec::with_capacity(df.height());

        for row in 0..df.height() {
            let malformed = move |reason: String| LoaderError::MalformedRow {
                table,
                row: row + 1,
                reason,
            };
            let record = columns.record(row).map_err(malformed)?;
            if !seen.insert(record.id) {
                return Err(malformed(format!("duplicate match id {}", record.id)));
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Convert a deliveries DataFrame into typed records.
    pub fn deliveries_from_frame(df: &DataFrame) -> Result<Vec<Delivery>, LoaderError> {
        let table = Table::Deliveries;
        let columns = DeliveryColumns::extract(df)?;
        let mut records = Vec::with_capacity(df.height());
        let mut stripped = 0usize;

        for row in 0..df.height() {
            let mut record = columns.record(row).map_err(|reason| LoaderError::MalformedRow {
                table,
                row: row + 1,
                reason,
            })?;
            if !record.is_wicket && record.dismissal_kind.is_some() {
                record.dismissal_kind = None;
                stripped += 1;
            }
            records.push(record);
        }

        if stripped > 0 {
            warn!(stripped, "Dropped dismissal kinds recorded on non-wicket deliveries");
        }
        Ok(records)
    }
}

fn require<'a>(
    df: &'a DataFrame,
    table: Table,
    column: &'static str,
) -> Result<&'a Column, LoaderError> {
    df.column(column)
        .map_err(|_| LoaderError::MissingColumn { table, column })
}

fn text_column(
    df: &DataFrame,
    table: Table,
    column: &'static str,
) -> Result<Vec<Option<String>>, LoaderError> {
    let casted = require(df, table, column)?
        .cast(&DataType::String)
        .map_err(|source| LoaderError::Csv { table, source })?;
    let values = casted
        .str()
        .map_err(|source| LoaderError::Csv { table, source })?;

    Ok(values
        .into_iter()
        .map(|v| {
            v.map(str::trim)
                .filter(|s| !s.is_empty() && *s != "NA")
                .map(str::to_string)
        })
        .collect())
}

fn int_column(
    df: &DataFrame,
    table: Table,
    column: &'static str,
) -> Result<Vec<Option<i64>>, LoaderError> {
    let casted = require(df, table, column)?
        .cast(&DataType::Int64)
        .map_err(|source| LoaderError::Csv { table, source })?;
    let values: Vec<Option<i64>> = casted
        .i64()
        .map_err(|source| LoaderError::Csv { table, source })?
        .into_iter()
        .collect();
    reject_unparsed(df, table, column, &values, "an integer")?;
    Ok(values)
}

fn float_column(
    df: &DataFrame,
    table: Table,
    column: &'static str,
) -> Result<Vec<Option<f64>>, LoaderError> {
    let casted = require(df, table, column)?
        .cast(&DataType::Float64)
        .map_err(|source| LoaderError::Csv { table, source })?;
    let values: Vec<Option<f64>> = casted
        .f64()
        .map_err(|source| LoaderError::Csv { table, source })?
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect();
    reject_unparsed(df, table, column, &values, "a number")?;
    Ok(values)
}

/// Non-strict casts turn unparseable cells into nulls. Report the first such cell.
fn reject_unparsed<T>(
    df: &DataFrame,
    table: Table,
    column: &'static str,
    parsed: &[Option<T>],
    expected: &str,
) -> Result<(), LoaderError> {
    let raw = text_column(df, table, column)?;
    let unparsed = raw
        .into_iter()
        .zip(parsed)
        .enumerate()
        .find_map(|(row, (raw, value))| match (raw, value) {
            (Some(raw), None) => Some((row, raw)),
            _ => None,
        });

    match unparsed {
        Some((row, raw)) => Err(LoaderError::MalformedRow {
            table,
            row: row + 1,
            reason: format!("`{column}` is not {expected} ({raw:?})"),
        }),
        None => Ok(()),
    }
}

/// Margins are whole, non-negative and fit the record's `u32`.
fn parse_margin(margin: f64) -> Result<u32, String> {
    if margin < 0.0 {
        return Err(format!("`result_margin` is negative ({margin})"));
    }
    if margin.fract() != 0.0 {
        return Err(format!("`result_margin` is not a whole number ({margin})"));
    }
    if margin > f64::from(u32::MAX) {
        return Err(format!("`result_margin` is out of range ({margin})"));
    }
    Ok(margin as u32)
}

fn required_text(value: &Option<String>, column: &str) -> Result<String, String> {
    value
        .clone()
        .ok_or_else(|| format!("`{column}` is empty"))
}

fn required_count(value: Option<i64>, column: &str) -> Result<u64, String> {
    let value = value.ok_or_else(|| format!("`{column}` is empty"))?;
    u64::try_from(value).map_err(|_| format!("`{column}` is negative ({value})"))
}

/// Column vectors of the matches table, extracted once per load.
struct MatchColumns {
    id: Vec<Option<i64>>,
    season: Vec<Option<String>>,
    team1: Vec<Option<String>>,
    team2: Vec<Option<String>>,
    toss_winner: Vec<Option<String>>,
    winner: Vec<Option<String>>,
    result: Vec<Option<String>>,
    result_margin: Vec<Option<f64>>,
    player_of_match: Vec<Option<String>>,
}

impl MatchColumns {
    fn extract(df: &DataFrame) -> Result<Self, LoaderError> {
        let table = Table::Matches;
        Ok(Self {
            id: int_column(df, table, "id")?,
            season: text_column(df, table, "season")?,
            team1: text_column(df, table, "team1")?,
            team2: text_column(df, table, "team2")?,
            toss_winner: text_column(df, table, "toss_winner")?,
            winner: text_column(df, table, "winner")?,
            result: text_column(df, table, "result")?,
            result_margin: float_column(df, table, "result_margin")?,
            player_of_match: text_column(df, table, "player_of_match")?,
        })
    }

    fn record(&self, row: usize) -> Result<MatchRecord, String> {
        let winner = self.winner[row].clone();
        let result = match &self.result[row] {
            Some(raw) => MatchResult::parse(raw),
            None if winner.is_none() => MatchResult::NoResult,
            None => MatchResult::Other,
        };
        let result_margin = self.result_margin[row].map(parse_margin).transpose()?;

        let mut record = MatchRecord {
            id: required_count(self.id[row], "id")?,
            season: required_text(&self.season[row], "season")?,
            team1: required_text(&self.team1[row], "team1")?,
            team2: required_text(&self.team2[row], "team2")?,
            toss_winner: required_text(&self.toss_winner[row], "toss_winner")?,
            winner,
            result,
            result_margin,
            player_of_match: self.player_of_match[row].clone(),
        };
        DataProcessor::normalize_match(&mut record);

        if !record.involves(&record.toss_winner) {
            return Err(format!(
                "toss winner `{}` did not play in match {}",
                record.toss_winner, record.id
            ));
        }
        if let Some(winner) = &record.winner {
            if !record.involves(winner) {
                return Err(format!(
                    "winner `{}` did not play in match {}",
                    winner, record.id
                ));
            }
        }
        Ok(record)
    }
}

/// Column vectors of the deliveries table.
struct DeliveryColumns {
    match_id: Vec<Option<i64>>,
    batter: Vec<Option<String>>,
    bowler: Vec<Option<String>>,
    fielder: Vec<Option<String>>,
    batsman_runs: Vec<Option<i64>>,
    extras_type: Vec<Option<String>>,
    is_wicket: Vec<Option<i64>>,
    dismissal_kind: Vec<Option<String>>,
}

impl DeliveryColumns {
    fn extract(df: &DataFrame) -> Result<Self, LoaderError> {
        let table = Table::Deliveries;
        Ok(Self {
            match_id: int_column(df, table, "match_id")?,
            batter: text_column(df, table, "batter")?,
            bowler: text_column(df, table, "bowler")?,
            fielder: text_column(df, table, "fielder")?,
            batsman_runs: int_column(df, table, "batsman_runs")?,
            extras_type: text_column(df, table, "extras_type")?,
            is_wicket: int_column(df, table, "is_wicket")?,
            dismissal_kind: text_column(df, table, "dismissal_kind")?,
        })
    }

    fn record(&self, row: usize) -> Result<Delivery, String> {
        let runs = required_count(self.batsman_runs[row], "batsman_runs")?;
        let is_wicket = match self.is_wicket[row] {
            Some(0) => false,
            Some(1) => true,
            Some(other) => return Err(format!("`is_wicket` must be 0 or 1, got {other}")),
            None => return Err("`is_wicket` is empty".to_string()),
        };

        Ok(Delivery {
            match_id: required_count(self.match_id[row], "match_id")?,
            batter: required_text(&self.batter[row], "batter")?,
            bowler: required_text(&self.bowler[row], "bowler")?,
            fielder: self.fielder[row].clone(),
            batsman_runs: u32::try_from(runs)
                .map_err(|_| format!("`batsman_runs` out of range ({runs})"))?,
            extras_type: self.extras_type[row].as_deref().map(ExtrasType::parse),
            is_wicket,
            dismissal_kind: self.dismissal_kind[row].as_deref().map(DismissalKind::parse),
        })
    }
}
