//! Upcoming departures from one station.

use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::domain::ServiceTime;

use super::config::QueryOptions;
use super::error::{QueryError, StationRole};
use super::Planner;

/// One call at the queried station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureEntry {
    pub departure_time: ServiceTime,
    pub route_name: String,
    pub route_short_name: String,
    pub headsign: String,
    pub trip_id: String,
    pub stop_id: String,
}

impl Planner<'_> {
    /// Calls at a station, ordered by departure on the 24-hour clock.
    ///
    /// The past filter and limit behave as in [`Planner::find_schedule`].
    pub fn find_departures(
        &self,
        station: &str,
        options: &QueryOptions,
        now: NaiveTime,
    ) -> Result<Vec<DepartureEntry>, QueryError> {
        let stop = self.resolve(StationRole::Station, station)?;

        let mut entries: Vec<DepartureEntry> = self
            .timetable
            .stop_times()
            .iter()
            .filter(|st| st.stop_id == stop.id)
            .filter(|st| options.include_all || st.departure.is_after_clock(now))
            .map(|st| {
                let trip = self.timetable.trip(&st.trip_id);
                let (route_name, route_short_name) = self.route_names(trip);
                DepartureEntry {
                    departure_time: st.departure,
                    route_name,
                    route_short_name,
                    headsign: st.effective_headsign(trip).to_string(),
                    trip_id: st.trip_id.clone(),
                    stop_id: st.stop_id.clone(),
                }
            })
            .collect();

        entries.sort_by(|a, b| a.departure_time.cmp_clock(&b.departure_time));
        entries.truncate(options.limit_or(self.config.departure_limit));

        debug!(station = %stop.id, returned = entries.len(), "Departures query");

        Ok(entries)
    }
}
