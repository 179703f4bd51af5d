//! Domain types for the schedule engine.
//!
//! Explicit record types for the four GTFS tables plus the service-day time
//! type. Records are plain data; the feed loader decides how malformed input
//! maps onto them.

mod station;
mod time;
mod trip;

pub use station::Stop;
pub use time::{ServiceTime, TimeError, TravelDuration, clock_minutes_of};
pub use trip::{Route, StopTime, Trip};
