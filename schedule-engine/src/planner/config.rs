//! Query configuration for the schedule engine.

use crate::stations::DEFAULT_THRESHOLD;

/// Engine-wide defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum number of trips returned by a schedule query.
    pub schedule_limit: usize,

    /// Maximum number of departures returned by a departures query.
    pub departure_limit: usize,

    /// Minimum (exclusive) similarity for a known mis-transcription
    /// to be applied during name resolution.
    pub fuzzy_threshold: f64,
}

impl EngineConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(schedule_limit: usize, departure_limit: usize, fuzzy_threshold: f64) -> Self {
        Self {
            schedule_limit,
            departure_limit,
            fuzzy_threshold,
        }
    }

    /// Set the schedule result limit.
    pub fn with_schedule_limit(mut self, limit: usize) -> Self {
        self.schedule_limit = limit;
        self
    }

    /// Set the departures result limit.
    pub fn with_departure_limit(mut self, limit: usize) -> Self {
        self.departure_limit = limit;
        self
    }

    /// Set the fuzzy matching threshold.
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schedule_limit: 5,
            departure_limit: 10,
            fuzzy_threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Per-query options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Result limit; the engine default when `None` or zero.
    pub limit: Option<usize>,

    /// Keep entries whose departure is not after the current time.
    pub include_all: bool,
}

impl QueryOptions {
    /// Upcoming entries only, default limit.
    pub fn upcoming() -> Self {
        Self::default()
    }

    /// Set an explicit result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Include entries that have already departed.
    pub fn including_past(mut self) -> Self {
        self.include_all = true;
        self
    }

    pub(crate) fn limit_or(&self, default: usize) -> usize {
        self.limit.filter(|&n| n > 0).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.schedule_limit, 5);
        assert_eq!(config.departure_limit, 10);
        assert_eq!(config.fuzzy_threshold, 0.7);
    }

    #[test]
    fn custom_config() {
        let config = EngineConfig::new(3, 4, 0.8);
        let built = EngineConfig::default()
            .with_schedule_limit(3)
            .with_departure_limit(4)
            .with_fuzzy_threshold(0.8);

        assert_eq!(config, built);
    }

    #[test]
    fn query_options() {
        let options = QueryOptions::upcoming();
        assert_eq!(options.limit_or(5), 5);
        assert!(!options.include_all);

        let options = QueryOptions::upcoming().with_limit(2).including_past();
        assert_eq!(options.limit_or(5), 2);
        assert!(options.include_all);

        assert_eq!(QueryOptions::upcoming().with_limit(0).limit_or(5), 5);
    }
}
