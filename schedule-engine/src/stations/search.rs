//! Station search by partial name.

use crate::domain::Stop;
use crate::feed::Timetable;

use super::aliases::normalize;

/// Stops whose lower-cased display name contains the query, sorted by
/// display name ignoring case.
///
/// An empty query matches every stop.
pub fn search_stations<'t>(timetable: &'t Timetable, query: &str) -> Vec<&'t Stop> {
    let needle = normalize(query);
    let mut matches: Vec<&Stop> = timetable
        .stops()
        .iter()
        .filter(|stop| stop.match_name().contains(&needle))
        .collect();
    matches.sort_by(|a, b| {
        a.match_name()
            .cmp(b.match_name())
            .then_with(|| a.name.cmp(&b.name))
    });
    matches
}
