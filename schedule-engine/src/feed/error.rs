//! Feed loading error types.

use super::source::TableName;

/// Errors that can occur while loading the GTFS tables.
///
/// Per-record problems never surface here; the loader repairs them in place.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A table could not be fetched from its source
    #[error("GTFS table {table} unavailable: {reason}")]
    DataUnavailable { table: TableName, reason: String },

    /// The source itself could not be constructed
    #[error("invalid feed source: {0}")]
    InvalidSource(String),
}

impl FeedError {
    pub(crate) fn unavailable(table: TableName, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            table,
            reason: reason.to_string(),
        }
    }
}
