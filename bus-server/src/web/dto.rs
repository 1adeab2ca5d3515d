//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::resolver::{ArrivalEvent, NextBus};

/// Query parameters for the next-bus endpoint.
#[derive(Debug, Deserialize)]
pub struct NextBusRequest {
    /// Stop name fragment. Required by the endpoint; optional in the DTO
    /// so the handler can report its absence as a specific 400.
    pub bus_stop_name: Option<String>,

    /// How many scheduled events past the next one to return (default 0,
    /// wraps circularly through the day).
    pub offset: Option<u32>,
}

/// One entry of a stop's full daily schedule.
#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    pub direction: String,
    pub bus_number: u8,
    /// "HH:MM"
    pub arrival_time: String,
}

impl ScheduleEntry {
    pub fn from_event(event: &ArrivalEvent) -> Self {
        Self {
            direction: event.direction.clone(),
            bus_number: event.bus_number,
            arrival_time: event.arrival.to_string(),
        }
    }
}

/// Successful single-match response.
#[derive(Debug, Serialize)]
pub struct NextBusResponse {
    /// The full directory name of the matched stop.
    pub bus_stop: String,

    pub direction: String,

    /// Positional run number, not a physical vehicle ID.
    pub bus_number: u8,

    /// "HH:MM"
    pub arrival_time: String,

    /// Localized countdown, e.g. "6 годин 15 хвилин".
    pub time_left: String,

    /// The stop's whole timeline for the day.
    pub full_schedule: Vec<ScheduleEntry>,
}

impl NextBusResponse {
    pub fn from_next(next: &NextBus) -> Self {
        Self {
            bus_stop: next.bus_stop.clone(),
            direction: next.direction.clone(),
            bus_number: next.bus_number,
            arrival_time: next.arrival.to_string(),
            time_left: next.time_left.clone(),
            full_schedule: next
                .full_schedule
                .iter()
                .map(ScheduleEntry::from_event)
                .collect(),
        }
    }
}

/// Several stops matched the fragment; the client should narrow it.
#[derive(Debug, Serialize)]
pub struct AmbiguousStopsResponse {
    pub message: String,
    pub stops: Vec<String>,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
