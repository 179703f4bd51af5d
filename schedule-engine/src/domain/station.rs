//! Stop records.

use serde::Serialize;

/// A stop or station from `stops.txt`.
///
/// Identifiers are opaque feed strings (e.g. "UN" for Union Station). A
/// `Stop` is immutable once the timetable has been loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    /// Feed identifier, unique within the timetable.
    pub id: String,
    /// Rider-facing display name.
    pub name: String,
    /// Latitude in degrees, zero when the feed gave none.
    pub lat: f64,
    /// Longitude in degrees, zero when the feed gave none.
    pub lon: f64,
    #[serde(skip)]
    match_name: String,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            match_name: name.to_lowercase(),
            name,
            lat,
            lon,
        }
    }

    /// Lower-cased display name, as used for name matching.
    pub fn match_name(&self) -> &str {
        &self.match_name
    }

    /// First whitespace-delimited word of the lower-cased display name.
    ///
    /// "Oriole GO" gives "oriole". Returns `None` for a blank name.
    pub fn leading_word(&self) -> Option<&str> {
        self.match_name.split_whitespace().next()
    }
}
