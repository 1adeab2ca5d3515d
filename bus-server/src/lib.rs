//! Next-bus timetable server.
//!
//! A web service that answers: "when is the next bus at stop X?"
//! against a fixed, hand-curated timetable.

pub mod domain;
pub mod resolver;
pub mod timetable;
pub mod web;
