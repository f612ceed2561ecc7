//! Data module - CSV loading, typed records and normalization

mod dataset;
mod loader;
mod processor;
mod records;

pub use dataset::Dataset;
pub use loader::{DataLoader, DataSources, LoaderError, Table, DELIVERY_COLUMNS, MATCH_COLUMNS};
pub use processor::{canonical_team, DataProcessor, TEAM_ALIASES};
pub use records::{
    Delivery, DismissalKind, ExtrasType, MatchRecord, MatchResult, WICKET_MARGIN_WEIGHT,
};
