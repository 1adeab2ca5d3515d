//! Domain types for the bus timetable server.
//!
//! Core validated types shared by the timetable and resolver layers.

mod time;

pub use time::{BusTime, TimeError, parse_hhmm_time};
