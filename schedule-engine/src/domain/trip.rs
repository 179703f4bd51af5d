//! Route, trip and stop-time records.

use super::ServiceTime;

/// A route from `routes.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: String,
    /// Full line name, e.g. "Richmond Hill".
    pub long_name: String,
    /// Short code, e.g. "RH". May be empty.
    pub short_name: String,
}

/// A trip from `trips.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    /// Destination shown on the vehicle. May be empty.
    pub headsign: String,
}

/// One call of a trip at a stop, from `stop_times.txt`.
///
/// Within a trip, `sequence` is strictly increasing in the order the
/// vehicle visits its stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: String,
    pub stop_id: String,
    pub arrival: ServiceTime,
    pub departure: ServiceTime,
    pub sequence: u32,
    /// Per-call headsign override.
    pub headsign: Option<String>,
}

impl StopTime {
    /// The headsign riders see at this call: the override if present,
    /// otherwise the trip's.
    pub fn effective_headsign<'a>(&'a self, trip: Option<&'a Trip>) -> &'a str {
        self.headsign
            .as_deref()
            .or_else(|| trip.map(|t| t.headsign.as_str()))
            .unwrap_or("")
    }
}
