//! Station name resolution.
//!
//! Maps free-form, possibly mis-transcribed station names (English or
//! Chinese) onto stops of a loaded [`Timetable`](crate::feed::Timetable):
//! curated aliases first, then known mis-transcriptions by edit distance,
//! then plain substring matching.

mod aliases;
mod fuzzy;
mod resolver;
mod search;

pub use aliases::{AliasTable, normalize};
pub use fuzzy::{DEFAULT_THRESHOLD, MISTRANSCRIPTIONS, similarity};
pub use resolver::{StationResolver, Strategy};
pub use search::search_stations;
