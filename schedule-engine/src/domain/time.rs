//! Service-day time handling for GTFS schedules.
//!
//! GTFS expresses stop times as "HH:MM:SS" strings relative to the start of
//! the service day. Trips that run past midnight keep counting upwards, so
//! "25:30:00" is half past one in the morning on the following calendar day
//! but still belongs to the same service day.
//!
//! Two readings of the same value exist and must not be mixed up:
//!
//! - [`ServiceTime::raw_minutes`] keeps the hour as written. Use it for
//!   arithmetic between two stop times of one trip (travel durations).
//! - [`ServiceTime::clock_minutes`] folds the hour modulo 24. Use it whenever
//!   a stop time is compared against the wall clock or ordered for display.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

/// Minutes in a calendar day.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A GTFS stop time, measured from the start of the service day.
///
/// Hours may exceed 23 for post-midnight service.
///
/// # Examples
///
/// ```
/// use schedule_engine::domain::ServiceTime;
///
/// let t = ServiceTime::parse("25:30:00").unwrap();
/// assert_eq!(t.hour(), 25);
/// assert_eq!(t.raw_minutes(), 25 * 60 + 30);
/// assert_eq!(t.clock_minutes(), 90);
/// assert_eq!(t.to_string(), "25:30:00");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ServiceTime {
    secs: u32,
}

impl ServiceTime {
    /// Midnight at the start of the service day.
    pub const MIDNIGHT: Self = Self { secs: 0 };

    /// Create a time from components. Minutes and seconds carry into the
    /// next unit as usual; hours are not wrapped.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            secs: hour * 3600 + minute * 60 + second,
        }
    }

    /// Parse a time from "H:MM:SS", "HH:MM:SS" or "HH:MM".
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_engine::domain::ServiceTime;
    ///
    /// assert!(ServiceTime::parse("08:05:00").is_ok());
    /// assert!(ServiceTime::parse("8:05:00").is_ok());
    /// assert!(ServiceTime::parse("24:20").is_ok());
    ///
    /// assert!(ServiceTime::parse("").is_err());
    /// assert!(ServiceTime::parse("08:65:00").is_err());
    /// assert!(ServiceTime::parse("eight").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let mut parts = s.trim().split(':');

        let hour = parts
            .next()
            .filter(|h| !h.is_empty() && h.len() <= 3)
            .and_then(|h| h.parse::<u32>().ok())
            .ok_or_else(|| TimeError::new("invalid hour digits"))?;

        let minute = parts
            .next()
            .and_then(parse_two_digits)
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = match parts.next() {
            Some(sec) => parse_two_digits(sec).ok_or_else(|| TimeError::new("invalid second digits"))?,
            None => 0,
        };
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        if parts.next().is_some() {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        Ok(Self::from_hms(hour, minute, second))
    }

    /// Hour as written in the feed (may be 24 or more).
    pub fn hour(&self) -> u32 {
        self.secs / 3600
    }

    /// Minute within the hour.
    pub fn minute(&self) -> u32 {
        (self.secs / 60) % 60
    }

    /// Second within the minute.
    pub fn second(&self) -> u32 {
        self.secs % 60
    }

    /// Minutes since the start of the service day, without wrapping.
    ///
    /// Seconds are truncated.
    pub fn raw_minutes(&self) -> u32 {
        self.secs / 60
    }

    /// Minutes since midnight on a 24-hour clock (hour taken modulo 24).
    ///
    /// Seconds are truncated.
    pub fn clock_minutes(&self) -> u32 {
        (self.hour() % 24) * 60 + self.minute()
    }

    /// Whether this time falls strictly after the wall-clock minute of `now`.
    ///
    /// Both sides are compared on the 24-hour clock, so a 25:30 departure
    /// counts as 01:30.
    pub fn is_after_clock(&self, now: NaiveTime) -> bool {
        self.clock_minutes() > clock_minutes_of(now)
    }

    /// Ordering on the 24-hour clock.
    pub fn cmp_clock(&self, other: &Self) -> Ordering {
        self.clock_minutes().cmp(&other.clock_minutes())
    }

    /// Travel time from `self` to a later stop time on the same trip.
    ///
    /// Uses raw minutes so that 23:50:00 → 24:20:00 is thirty minutes. No
    /// guard against negative results: both times come from one trip.
    pub fn duration_until(&self, later: ServiceTime) -> TravelDuration {
        TravelDuration::minutes(i64::from(later.raw_minutes()) - i64::from(self.raw_minutes()))
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceTime({self})")
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl Serialize for ServiceTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Minutes since midnight of a wall-clock time, seconds truncated.
pub fn clock_minutes_of(now: NaiveTime) -> u32 {
    (now.hour() * 60 + now.minute()) % MINUTES_PER_DAY
}

/// Time between two stop times of one trip.
///
/// Displays as "45m" below an hour and "1h 5m" from an hour upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TravelDuration {
    minutes: i64,
}

impl TravelDuration {
    /// A duration of the given number of minutes.
    pub fn minutes(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Total minutes.
    pub fn as_minutes(&self) -> i64 {
        self.minutes
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes >= 60 {
            write!(f, "{}h {}m", self.minutes / 60, self.minutes % 60)
        } else {
            write!(f, "{}m", self.minutes)
        }
    }
}

impl Serialize for TravelDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse exactly two ASCII digits.
fn parse_two_digits(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
