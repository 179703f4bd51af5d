//! GTFS schedule resolution engine.
//!
//! Answers "when is the next train from X to Y?" for free-form, possibly
//! mis-transcribed station names in English or Chinese, against a GTFS feed
//! loaded once into memory.

pub mod domain;
pub mod feed;
pub mod intent;
pub mod planner;
pub mod service;
pub mod stations;

pub use service::ScheduleService;
