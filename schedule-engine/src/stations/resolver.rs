//! Free-form station name resolution.

use tracing::{debug, trace};

use crate::domain::Stop;
use crate::feed::Timetable;

use super::aliases::{AliasTable, normalize};
use super::fuzzy::{DEFAULT_THRESHOLD, MISTRANSCRIPTIONS, similarity};

/// One step of the resolution cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Curated alias lookup.
    ExactAlias,
    /// Known mis-transcriptions, matched by edit distance.
    Fuzzy,
    /// Containment against display names, first stop in load order wins.
    Substring,
}

impl Strategy {
    /// The cascade, in the order it is tried.
    pub const CASCADE: [Strategy; 3] = [Strategy::ExactAlias, Strategy::Fuzzy, Strategy::Substring];

    fn apply<'t>(
        self,
        name: &str,
        resolver: &StationResolver,
        timetable: &'t Timetable,
    ) -> Option<&'t Stop> {
        match self {
            Strategy::ExactAlias => resolver
                .aliases
                .get(name)
                .and_then(|stop_id| timetable.stop(stop_id)),
            Strategy::Fuzzy => MISTRANSCRIPTIONS
                .iter()
                .filter(|(pattern, _)| similarity(name, pattern) > resolver.threshold)
                .find_map(|(pattern, correction)| {
                    trace!(name, pattern, correction, "Mis-transcription candidate");
                    resolver
                        .aliases
                        .get(correction)
                        .and_then(|stop_id| timetable.stop(stop_id))
                        .or_else(|| first_containing(timetable, correction))
                }),
            Strategy::Substring => first_containing(timetable, name),
        }
    }
}

/// First stop, in load order, whose lower-cased name contains `needle` or
/// whose leading word is contained in `needle`.
fn first_containing<'t>(timetable: &'t Timetable, needle: &str) -> Option<&'t Stop> {
    timetable.stops().iter().find(|stop| {
        stop.match_name().contains(needle)
            || stop
                .leading_word()
                .is_some_and(|word| needle.contains(word))
    })
}

/// Resolves spoken or typed station names to loaded stops.
///
/// Immutable once built; share it freely across queries.
#[derive(Debug, Clone)]
pub struct StationResolver {
    aliases: AliasTable,
    threshold: f64,
    strategies: Vec<Strategy>,
}

impl StationResolver {
    /// Resolver over the built-in aliases with the given fuzzy threshold.
    pub fn new(threshold: f64) -> Self {
        Self::with_aliases(AliasTable::builtin(), threshold)
    }

    /// Resolver over a custom alias table.
    pub fn with_aliases(aliases: AliasTable, threshold: f64) -> Self {
        Self {
            aliases,
            threshold,
            strategies: Strategy::CASCADE.to_vec(),
        }
    }

    /// Replace the cascade with the given strategies, tried in order.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Strategies in the order they are tried.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Minimum (exclusive) similarity for a mis-transcription to apply.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Resolve a name against the timetable's stops.
    pub fn resolve<'t>(&self, name: &str, timetable: &'t Timetable) -> Option<&'t Stop> {
        self.resolve_with_strategy(name, timetable)
            .map(|(stop, _)| stop)
    }

    /// Resolve a name, also reporting which strategy matched.
    pub fn resolve_with_strategy<'t>(
        &self,
        name: &str,
        timetable: &'t Timetable,
    ) -> Option<(&'t Stop, Strategy)> {
        let normalized = normalize(name);
        if normalized.is_empty() {
            debug!("Empty station name");
            return None;
        }

        for &strategy in &self.strategies {
            trace!(name = %normalized, ?strategy, "Trying strategy");
            if let Some(stop) = strategy.apply(&normalized, self, timetable) {
                debug!(name = %normalized, stop_id = %stop.id, ?strategy, "Station resolved");
                return Some((stop, strategy));
            }
        }

        debug!(name = %normalized, "Station not resolved");
        None
    }
}

impl Default for StationResolver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
