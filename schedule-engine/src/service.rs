//! The schedule service: one loaded timetable, shared by every query.

use std::sync::{Arc, OnceLock};

use chrono::{Local, NaiveTime};
use tracing::{info, warn};

use crate::domain::Stop;
use crate::feed::{FeedError, LoadSummary, TableSource, Timetable};
use crate::planner::{
    DepartureEntry, EngineConfig, Planner, QueryError, QueryOptions, ScheduleEntry,
};
use crate::stations::{self, StationResolver};

/// Entry point for schedule queries.
///
/// Starts empty. Every query fails with [`QueryError::NotReady`] until a
/// timetable has been loaded or installed; after that the snapshot never
/// changes and reads take no lock.
#[derive(Debug)]
pub struct ScheduleService {
    config: EngineConfig,
    stations: StationResolver,
    timetable: OnceLock<Arc<Timetable>>,
}

impl ScheduleService {
    /// Create a service with no timetable yet.
    pub fn new(config: EngineConfig) -> Self {
        let stations = StationResolver::new(config.fuzzy_threshold);
        Self {
            config,
            stations,
            timetable: OnceLock::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fetch and install the timetable from a source.
    ///
    /// On failure nothing is installed and the load may be retried.
    pub async fn load<S: TableSource>(&self, source: &S) -> Result<LoadSummary, FeedError> {
        let timetable = Timetable::load(source).await?;
        Ok(self.install(timetable))
    }

    /// Install an already-built timetable.
    ///
    /// The first installed timetable wins; later ones are discarded and the
    /// summary of the installed one is returned.
    pub fn install(&self, timetable: Timetable) -> LoadSummary {
        let summary = timetable.summary();
        if let Err(rejected) = self.timetable.set(Arc::new(timetable)) {
            warn!(
                rejected_stops = rejected.summary().stops,
                "Timetable already loaded, keeping existing snapshot"
            );
            return self.timetable.get().map_or(summary, |t| t.summary());
        }
        info!(stops = summary.stops, trips = summary.trips, "Schedule service ready");
        summary
    }

    /// Whether a timetable has been loaded.
    pub fn is_ready(&self) -> bool {
        self.timetable.get().is_some()
    }

    /// The loaded snapshot.
    pub fn snapshot(&self) -> Result<Arc<Timetable>, QueryError> {
        self.timetable.get().cloned().ok_or(QueryError::NotReady)
    }

    fn planner(&self) -> Result<Planner<'_>, QueryError> {
        let timetable = self.timetable.get().ok_or(QueryError::NotReady)?;
        Ok(Planner::new(timetable, &self.stations, &self.config))
    }

    /// Resolve a free-form station name. `Ok(None)` when nothing matches.
    pub fn resolve_station(&self, name: &str) -> Result<Option<Stop>, QueryError> {
        let timetable = self.timetable.get().ok_or(QueryError::NotReady)?;
        Ok(self.stations.resolve(name, timetable).cloned())
    }

    /// Trips between two stations, relative to the local time now.
    pub fn find_schedule(
        &self,
        from: &str,
        to: &str,
        options: &QueryOptions,
    ) -> Result<Vec<ScheduleEntry>, QueryError> {
        self.find_schedule_at(from, to, options, Local::now().time())
    }

    /// Trips between two stations, relative to `now`.
    pub fn find_schedule_at(
        &self,
        from: &str,
        to: &str,
        options: &QueryOptions,
        now: NaiveTime,
    ) -> Result<Vec<ScheduleEntry>, QueryError> {
        self.planner()?.find_schedule(from, to, options, now)
    }

    /// Departures from a station, relative to the local time now.
    pub fn find_departures(
        &self,
        station: &str,
        options: &QueryOptions,
    ) -> Result<Vec<DepartureEntry>, QueryError> {
        self.find_departures_at(station, options, Local::now().time())
    }

    /// Departures from a station, relative to `now`.
    pub fn find_departures_at(
        &self,
        station: &str,
        options: &QueryOptions,
        now: NaiveTime,
    ) -> Result<Vec<DepartureEntry>, QueryError> {
        self.planner()?.find_departures(station, options, now)
    }

    /// Stops whose name contains `query`, sorted by name.
    pub fn search_stations(&self, query: &str) -> Result<Vec<Stop>, QueryError> {
        let timetable = self.timetable.get().ok_or(QueryError::NotReady)?;
        Ok(stations::search_stations(timetable, query)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
