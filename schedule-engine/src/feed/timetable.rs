//! The in-memory timetable snapshot.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{Route, Stop, StopTime, Trip};

use super::error::FeedError;
use super::source::{TableName, TableSource};
use super::table::{
    DelimitedTable, Parsed, parse_routes, parse_stop_times, parse_stops, parse_trips,
};

/// Raw text of the four tables, as handed over by a source.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub stops: String,
    pub routes: String,
    pub trips: String,
    pub stop_times: String,
}

impl RawTables {
    /// Fetch all four tables concurrently. The first failure aborts the load.
    pub async fn fetch<S: TableSource>(source: &S) -> Result<Self, FeedError> {
        let (stops, routes, trips, stop_times) = futures::try_join!(
            source.fetch(TableName::Stops),
            source.fetch(TableName::Routes),
            source.fetch(TableName::Trips),
            source.fetch(TableName::StopTimes),
        )?;

        Ok(Self {
            stops,
            routes,
            trips,
            stop_times,
        })
    }
}

/// Entity counts after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub stops: usize,
    pub routes: usize,
    pub trips: usize,
    pub stop_times: usize,
}

/// An immutable snapshot of the four GTFS tables.
///
/// Stops keep their load order, which the name resolver relies on.
/// Stop times are sorted by trip, then by stop sequence.
#[derive(Debug, Default)]
pub struct Timetable {
    stops: Vec<Stop>,
    stop_index: HashMap<String, usize>,
    routes: HashMap<String, Route>,
    trips: HashMap<String, Trip>,
    stop_times: Vec<StopTime>,
}

impl Timetable {
    /// Fetch and parse all tables from a source.
    pub async fn load<S: TableSource>(source: &S) -> Result<Self, FeedError> {
        let raw = RawTables::fetch(source).await?;
        Ok(Self::from_tables(&raw))
    }

    /// Parse already-fetched table text. Never fails; malformed rows are
    /// repaired and reported in the log.
    pub fn from_tables(raw: &RawTables) -> Self {
        let stops = report(TableName::Stops, parse_stops(&DelimitedTable::parse(&raw.stops)));
        let routes = report(TableName::Routes, parse_routes(&DelimitedTable::parse(&raw.routes)));
        let trips = report(TableName::Trips, parse_trips(&DelimitedTable::parse(&raw.trips)));
        let stop_times = report(
            TableName::StopTimes,
            parse_stop_times(&DelimitedTable::parse(&raw.stop_times)),
        );

        let timetable = Self::from_records(stops, routes, trips, stop_times);
        let summary = timetable.summary();
        info!(
            stops = summary.stops,
            routes = summary.routes,
            trips = summary.trips,
            stop_times = summary.stop_times,
            "Timetable loaded"
        );
        timetable
    }

    /// Build a timetable from records.
    ///
    /// Later duplicates of a stop, route or trip identifier replace earlier
    /// ones; a replaced stop keeps its original position. Stop times are
    /// sorted by trip then sequence.
    pub fn from_records(
        stops: Vec<Stop>,
        routes: Vec<Route>,
        trips: Vec<Trip>,
        mut stop_times: Vec<StopTime>,
    ) -> Self {
        let mut ordered: Vec<Stop> = Vec::with_capacity(stops.len());
        let mut stop_index = HashMap::with_capacity(stops.len());
        for stop in stops {
            match stop_index.entry(stop.id.clone()) {
                Entry::Occupied(slot) => ordered[*slot.get()] = stop,
                Entry::Vacant(slot) => {
                    slot.insert(ordered.len());
                    ordered.push(stop);
                }
            }
        }

        stop_times.sort_by(|a, b| a.trip_id.cmp(&b.trip_id).then(a.sequence.cmp(&b.sequence)));

        Self {
            stops: ordered,
            stop_index,
            routes: routes.into_iter().map(|r| (r.id.clone(), r)).collect(),
            trips: trips.into_iter().map(|t| (t.id.clone(), t)).collect(),
            stop_times,
        }
    }

    /// Look up a stop by identifier.
    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stop_index.get(id).map(|&idx| &self.stops[idx])
    }

    /// All stops, in load order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Look up a route by identifier.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Look up a trip by identifier.
    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.get(id)
    }

    /// All stop times, sorted by trip then sequence.
    pub fn stop_times(&self) -> &[StopTime] {
        &self.stop_times
    }

    /// Stop times grouped by trip, in trip-identifier order.
    ///
    /// Each group is ordered by stop sequence. Single pass, no allocation.
    pub fn trip_groups(&self) -> impl Iterator<Item = &[StopTime]> {
        self.stop_times.chunk_by(|a, b| a.trip_id == b.trip_id)
    }

    /// Entity counts.
    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            stops: self.stops.len(),
            routes: self.routes.len(),
            trips: self.trips.len(),
            stop_times: self.stop_times.len(),
        }
    }
}

fn report<T>(table: TableName, parsed: Parsed<T>) -> Vec<T> {
    if parsed.repaired > 0 {
        warn!(
            %table,
            repaired = parsed.repaired,
            rows = parsed.records.len(),
            "Repaired malformed fields while loading table"
        );
    }
    parsed.records
}
