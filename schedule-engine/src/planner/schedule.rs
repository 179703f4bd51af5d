//! Trips between two stations.

use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::domain::{ServiceTime, StopTime, TravelDuration};
use crate::feed::Timetable;

use super::config::QueryOptions;
use super::error::{QueryError, StationRole};
use super::Planner;

/// One trip from the origin to the destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub trip_id: String,
    pub route_name: String,
    pub route_short_name: String,
    /// Departure from the origin, as written in the feed.
    pub departure_time: ServiceTime,
    /// Arrival at the destination, as written in the feed.
    pub arrival_time: ServiceTime,
    pub from_station: String,
    pub to_station: String,
    pub duration: TravelDuration,
    pub headsign: String,
}

/// A trip that calls at both stops, origin first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripMatch<'t> {
    pub trip_id: &'t str,
    pub from: &'t StopTime,
    pub to: &'t StopTime,
}

/// Trips that call at `from_id` and later at `to_id`, in trip-identifier
/// order.
///
/// A trip that calls at either stop more than once is judged by its last
/// call there.
pub fn matching_trips<'t>(
    timetable: &'t Timetable,
    from_id: &str,
    to_id: &str,
) -> Vec<TripMatch<'t>> {
    timetable
        .trip_groups()
        .filter_map(|calls| {
            let from = calls.iter().rev().find(|st| st.stop_id == from_id)?;
            let to = calls.iter().rev().find(|st| st.stop_id == to_id)?;
            (from.sequence < to.sequence).then_some(TripMatch {
                trip_id: &from.trip_id,
                from,
                to,
            })
        })
        .collect()
}

impl Planner<'_> {
    /// Trips from one station to another, ordered by departure on the
    /// 24-hour clock.
    ///
    /// Unless `options.include_all` is set, only trips departing strictly
    /// after `now` are kept. No matching trips is an empty result, not an
    /// error.
    pub fn find_schedule(
        &self,
        from: &str,
        to: &str,
        options: &QueryOptions,
        now: NaiveTime,
    ) -> Result<Vec<ScheduleEntry>, QueryError> {
        let origin = self.resolve(StationRole::Origin, from)?;
        let destination = self.resolve(StationRole::Destination, to)?;

        let matches = matching_trips(self.timetable, &origin.id, &destination.id);
        let candidates = matches.len();

        let mut entries: Vec<ScheduleEntry> = matches
            .into_iter()
            .filter(|m| options.include_all || m.from.departure.is_after_clock(now))
            .map(|m| {
                let trip = self.timetable.trip(m.trip_id);
                let (route_name, route_short_name) = self.route_names(trip);
                ScheduleEntry {
                    trip_id: m.trip_id.to_string(),
                    route_name,
                    route_short_name,
                    departure_time: m.from.departure,
                    arrival_time: m.to.arrival,
                    from_station: origin.name.clone(),
                    to_station: destination.name.clone(),
                    duration: m.from.departure.duration_until(m.to.arrival),
                    headsign: m.to.effective_headsign(trip).to_string(),
                }
            })
            .collect();

        entries.sort_by(|a, b| a.departure_time.cmp_clock(&b.departure_time));
        entries.truncate(options.limit_or(self.config.schedule_limit));

        debug!(
            from = %origin.id,
            to = %destination.id,
            candidates,
            returned = entries.len(),
            "Schedule query"
        );

        Ok(entries)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Route, Stop, Trip};
    use crate::planner::EngineConfig;
    use crate::stations::StationResolver;
    use proptest::prelude::*;

    fn stop_time(stop_id: &str, sequence: u32, minutes: u32) -> StopTime {
        let time = ServiceTime::from_hms(0, minutes, 0);
        StopTime {
            trip_id: "T".into(),
            stop_id: stop_id.into(),
            arrival: time,
            departure: time,
            sequence,
            headsign: None,
        }
    }

    proptest! {
        /// A trip is included exactly when it visits the origin first
        #[test]
        fn direction_invariant(a_seq in 0u32..50, b_seq in 0u32..50) {
            prop_assume!(a_seq != b_seq);
            let timetable = Timetable::from_records(
                vec![Stop::new("A", "Alpha", 0.0, 0.0), Stop::new("B", "Beta", 0.0, 0.0)],
                vec![Route { id: "R".into(), long_name: "Line".into(), short_name: "L".into() }],
                vec![Trip { id: "T".into(), route_id: "R".into(), headsign: "Beta".into() }],
                vec![stop_time("A", a_seq, a_seq), stop_time("B", b_seq, b_seq)],
            );

            let matches = matching_trips(&timetable, "A", "B");
            prop_assert_eq!(matches.len(), usize::from(a_seq < b_seq));
        }

        /// Results are ordered by departure on the 24-hour clock
        #[test]
        fn results_sorted(hour in 0u32..24, minute in 0u32..60, include_all in any::<bool>()) {
            let timetable = crate::feed::fixtures::timetable();
            let stations = StationResolver::default();
            let config = EngineConfig::default();
            let planner = Planner::new(&timetable, &stations, &config);
            let options = QueryOptions { limit: Some(10), include_all };
            let now = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();

            let entries = planner.find_schedule("union", "oriole", &options, now).unwrap();
            prop_assert!(entries
                .windows(2)
                .all(|w| w[0].departure_time.clock_minutes() <= w[1].departure_time.clock_minutes()));
        }
    }
}
