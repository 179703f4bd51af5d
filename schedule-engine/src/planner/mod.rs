//! Schedule and departure queries over a loaded timetable.
//!
//! A [`Planner`] borrows an immutable [`Timetable`] and a
//! [`StationResolver`] and answers two questions:
//!
//! - which trips run from one station to another, and when
//!   ([`Planner::find_schedule`]);
//! - what leaves a station next ([`Planner::find_departures`]).
//!
//! Both take the current wall-clock time explicitly, so results are a pure
//! function of their inputs.

mod config;
mod departures;
mod error;
mod schedule;

pub use config::{EngineConfig, QueryOptions};
pub use departures::DepartureEntry;
pub use error::{QueryError, StationRole};
pub use schedule::{ScheduleEntry, TripMatch, matching_trips};

use crate::domain::{Stop, Trip};
use crate::feed::Timetable;
use crate::stations::StationResolver;

/// Route name shown when a trip or its route is missing from the feed.
pub const UNKNOWN_ROUTE: &str = "Unknown Route";

/// Answers queries against one timetable snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    timetable: &'a Timetable,
    stations: &'a StationResolver,
    config: &'a EngineConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(
        timetable: &'a Timetable,
        stations: &'a StationResolver,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            timetable,
            stations,
            config,
        }
    }

    /// Resolve a station name, naming its role on failure.
    pub fn resolve(&self, role: StationRole, name: &str) -> Result<&'a Stop, QueryError> {
        self.stations
            .resolve(name, self.timetable)
            .ok_or_else(|| QueryError::StationNotFound {
                role,
                name: name.to_string(),
            })
    }

    /// Long and short route names for a trip, with placeholders when the
    /// trip or its route is unknown.
    fn route_names(&self, trip: Option<&Trip>) -> (String, String) {
        match trip.and_then(|t| self.timetable.route(&t.route_id)) {
            Some(route) => (route.long_name.clone(), route.short_name.clone()),
            None => (UNKNOWN_ROUTE.to_string(), String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fixtures;

    #[test]
    fn resolve_reports_role() {
        let timetable = fixtures::timetable();
        let stations = StationResolver::default();
        let config = EngineConfig::default();
        let planner = Planner::new(&timetable, &stations, &config);

        assert_eq!(planner.resolve(StationRole::Origin, "oreo").unwrap().id, "OR");

        let err = planner.resolve(StationRole::Destination, "xyzzy123").unwrap_err();
        assert_eq!(
            err,
            QueryError::StationNotFound {
                role: StationRole::Destination,
                name: "xyzzy123".into(),
            }
        );
    }

    #[test]
    fn route_names_fall_back_for_unknown_trips() {
        let timetable = fixtures::timetable();
        let stations = StationResolver::default();
        let config = EngineConfig::default();
        let planner = Planner::new(&timetable, &stations, &config);

        let trip = timetable.trip("ST-0900");
        assert_eq!(planner.route_names(trip), ("Stouffville".into(), "ST".into()));
        assert_eq!(planner.route_names(None), (UNKNOWN_ROUTE.into(), String::new()));
    }
}
