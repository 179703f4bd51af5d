//! Query errors.

use std::fmt;

/// Which station of a query failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationRole {
    Origin,
    Destination,
    Station,
}

impl fmt::Display for StationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StationRole::Origin => "origin",
            StationRole::Destination => "destination",
            StationRole::Station => "station",
        })
    }
}

/// Error from a schedule, departures or station query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The timetable has not finished loading
    #[error("timetable not loaded yet")]
    NotReady,

    /// No resolution strategy matched the given name
    #[error("{role} station not found: {name}")]
    StationNotFound { role: StationRole, name: String },
}
