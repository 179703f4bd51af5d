//! GTFS feed loading.
//!
//! Fetches the four tables (stops, routes, trips, stop_times) from a
//! [`TableSource`], parses them leniently, and builds an immutable
//! [`Timetable`] snapshot.

mod error;
mod source;
mod table;
mod timetable;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::FeedError;
pub use source::{DirSource, HttpSource, HttpSourceConfig, TableName, TableSource};
pub use timetable::{LoadSummary, RawTables, Timetable};
