//! Next-arrival resolution.
//!
//! The full query pipeline for one request: disambiguate the stop, pick the
//! day's trunk schedule, synthesize the stop's timeline, find the next
//! arrival at or after the reference moment, apply the requested offset
//! with wraparound, and roll the reference over to start-of-day once when
//! today's schedule is exhausted.

use std::sync::Arc;

use chrono::{NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::domain::{BusTime, TimeError};
use crate::timetable::{StopLookup, Timetable};

use super::timeline::{ArrivalEvent, synthesize};

/// Error from resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    /// No stop matched the fragment, or the matched stop has no scheduled
    /// arrivals at all.
    #[error("Зупинку не знайдено")]
    StopNotFound,

    /// The timetable produced an impossible moment.
    #[error(transparent)]
    Schedule(#[from] TimeError),
}

/// A resolved next arrival.
#[derive(Debug, Clone)]
pub struct NextBus {
    /// The full directory name of the matched stop.
    pub bus_stop: String,
    pub direction: String,
    pub bus_number: u8,
    pub arrival: BusTime,
    /// Localized countdown, floored to whole minutes.
    pub time_left: String,
    /// The stop's whole timeline for the day, sorted by time of day.
    pub full_schedule: Vec<ArrivalEvent>,
}

/// Outcome of a resolution. An ambiguous fragment is a normal outcome, not
/// an error: the client narrows the fragment and asks again.
#[derive(Debug, Clone)]
pub enum Resolution {
    Next(NextBus),
    Ambiguous { stops: Vec<String> },
}

/// The schedule resolver. Holds the immutable timetable; cheap to share.
#[derive(Debug, Clone)]
pub struct Resolver {
    timetable: Arc<Timetable>,
}

impl Resolver {
    pub fn new(timetable: Arc<Timetable>) -> Self {
        Self { timetable }
    }

    /// Resolve a stop-name fragment to its next arrival.
    ///
    /// `now` is the current civil moment in the service timezone; it serves
    /// both as the reference for "next" and as the base of the countdown.
    /// `offset` asks for the Nth event after the next one, wrapping
    /// circularly through the day.
    pub fn resolve(
        &self,
        fragment: &str,
        offset: usize,
        now: NaiveDateTime,
    ) -> Result<Resolution, ResolveError> {
        let (name, stop) = match self.timetable.directory.find(fragment) {
            StopLookup::Unique { name, stop } => (name, stop),
            StopLookup::Ambiguous(names) => {
                debug!(fragment, candidates = names.len(), "ambiguous stop");
                return Ok(Resolution::Ambiguous {
                    stops: names.into_iter().map(String::from).collect(),
                });
            }
            StopLookup::NotFound => return Err(ResolveError::StopNotFound),
        };

        let date = now.date();
        let trunk = self.timetable.calendars.for_date(date);
        let is_transfer = self.timetable.directory.is_transfer(name);

        let mut events = synthesize(trunk, stop, date, is_transfer)?;
        events.sort_by_key(|e| e.arrival.time());

        if events.is_empty() {
            return Err(ResolveError::StopNotFound);
        }

        // First pass uses the real reference time. If the day's schedule is
        // exhausted, one bounded retry from start-of-day picks the earliest
        // run as tomorrow's first bus.
        for reference in [now.time(), NaiveTime::MIN] {
            let Some(next_idx) = events
                .iter()
                .position(|e| e.arrival.time() >= reference)
            else {
                debug!(stop = name, "schedule exhausted, rolling over");
                continue;
            };

            let chosen = &events[(next_idx + offset) % events.len()];
            let time_left = format_time_left(chosen.arrival.minutes_from(now));
            debug!(
                stop = name,
                arrival = %chosen.arrival,
                direction = %chosen.direction,
                "resolved next arrival"
            );

            return Ok(Resolution::Next(NextBus {
                bus_stop: name.to_string(),
                direction: chosen.direction.clone(),
                bus_number: chosen.bus_number,
                arrival: chosen.arrival,
                time_left,
                full_schedule: events.clone(),
            }));
        }

        // Not reachable with a non-empty timeline: start-of-day precedes
        // every time of day.
        Err(ResolveError::StopNotFound)
    }
}

/// Render a countdown the way the timetable board does: hours are omitted
/// when zero.
fn format_time_left(total_minutes: i64) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours} годин {minutes} хвилин")
    } else {
        format!("{minutes} хвилин")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::{CalendarTable, CalendarTables, HolidaySet, Stop, StopDirectory};
    use chrono::NaiveDate;

    /// Workday trunk ["06:00", "06:30", "07:00"]; "Центр" is offset 5
    /// towards the north, "Центральна площа" offsets 7/12, and "Лікарня"
    /// (a transfer stop) offset 3.
    fn resolver() -> Resolver {
        let directory = StopDirectory::new(
            [
                ("Центр".to_string(), Stop::new([("На північ", 5)])),
                (
                    "Центральна площа".to_string(),
                    Stop::new([("На північ", 7), ("На південь", 12)]),
                ),
                ("Лікарня".to_string(), Stop::new([("На північ", 3)])),
            ],
            ["Лікарня".to_string()],
        );
        let calendars = CalendarTables {
            workday: CalendarTable::parse(&["06:00", "06:30", "07:00"]).unwrap(),
            weekend: CalendarTable::parse(&["08:00"]).unwrap(),
            holiday: CalendarTable::parse(&["09:00"]).unwrap(),
            holidays: HolidaySet::new([NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()]),
        };
        Resolver::new(Arc::new(Timetable {
            directory,
            calendars,
        }))
    }

    /// 2026-03-02 is a Monday, so the workday trunk applies.
    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn expect_next(result: Result<Resolution, ResolveError>) -> NextBus {
        match result {
            Ok(Resolution::Next(next)) => next,
            other => panic!("expected a next arrival, got {other:?}"),
        }
    }

    #[test]
    fn next_arrival_after_reference() {
        let next = expect_next(resolver().resolve("Центр", 0, at(6, 10)));

        // 06:05 has left; next is 06:30 + 5, run number from trunk index 1.
        assert_eq!(next.bus_stop, "Центр");
        assert_eq!(next.direction, "На північ");
        assert_eq!(next.arrival.to_string(), "06:35");
        assert_eq!(next.bus_number, 2);
        assert_eq!(next.time_left, "25 хвилин");
        assert_eq!(next.full_schedule.len(), 3);
    }

    #[test]
    fn offset_advances_past_next() {
        let next = expect_next(resolver().resolve("Центр", 1, at(6, 10)));
        assert_eq!(next.arrival.to_string(), "07:05");
        assert_eq!(next.bus_number, 1);
    }

    #[test]
    fn offset_wraps_circularly() {
        let base = expect_next(resolver().resolve("Центр", 0, at(6, 10)));
        let wrapped = expect_next(resolver().resolve("Центр", 3, at(6, 10)));
        assert_eq!(wrapped.arrival, base.arrival);
        assert_eq!(wrapped.bus_number, base.bus_number);
    }

    #[test]
    fn exhausted_day_rolls_over_to_first_run() {
        let next = expect_next(resolver().resolve("Центр", 0, at(23, 50)));
        assert_eq!(next.arrival.to_string(), "06:05");
        // Countdown measures to tomorrow's 06:05.
        assert_eq!(next.time_left, "6 годин 15 хвилин");
    }

    #[test]
    fn ambiguous_fragment_lists_candidates() {
        match resolver().resolve("це", 0, at(6, 10)) {
            Ok(Resolution::Ambiguous { stops }) => {
                assert_eq!(stops, ["Центр", "Центральна площа"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fragment_is_not_found() {
        assert!(matches!(
            resolver().resolve("xyz", 0, at(6, 10)),
            Err(ResolveError::StopNotFound)
        ));
    }

    #[test]
    fn resolution_is_idempotent() {
        let a = expect_next(resolver().resolve("Центр", 1, at(6, 10)));
        let b = expect_next(resolver().resolve("Центр", 1, at(6, 10)));
        assert_eq!(a.arrival, b.arrival);
        assert_eq!(a.bus_number, b.bus_number);
        assert_eq!(a.time_left, b.time_left);
        assert_eq!(a.full_schedule, b.full_schedule);
    }

    #[test]
    fn transfer_stop_timeline_skips_once() {
        let next = expect_next(resolver().resolve("Лікарня", 0, at(5, 0)));
        // Trunk slot 06:30 is skipped at the transfer stop.
        let times: Vec<String> = next
            .full_schedule
            .iter()
            .map(|e| e.arrival.to_string())
            .collect();
        assert_eq!(times, ["06:03", "07:03"]);
    }

    #[test]
    fn both_directions_interleave_in_schedule() {
        let next = expect_next(resolver().resolve("площа", 0, at(6, 0)));
        assert_eq!(next.bus_stop, "Центральна площа");
        // 3 trunk slots x 2 directions.
        assert_eq!(next.full_schedule.len(), 6);
        // Earliest is 06:00 + 7 northbound.
        assert_eq!(next.arrival.to_string(), "06:07");
        assert_eq!(next.direction, "На північ");
    }

    #[test]
    fn weekend_uses_weekend_trunk() {
        // 2026-03-07 is a Saturday.
        let now = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let next = expect_next(resolver().resolve("Центр", 0, now));
        assert_eq!(next.arrival.to_string(), "08:05");
    }

    #[test]
    fn holiday_overrides_workday_trunk() {
        // 2026-01-01 is a Thursday but sits in the holiday set.
        let now = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let next = expect_next(resolver().resolve("Центр", 0, now));
        assert_eq!(next.arrival.to_string(), "09:05");
    }

    #[test]
    fn time_left_format_boundaries() {
        assert_eq!(format_time_left(0), "0 хвилин");
        assert_eq!(format_time_left(59), "59 хвилин");
        assert_eq!(format_time_left(60), "1 годин 0 хвилин");
        assert_eq!(format_time_left(125), "2 годин 5 хвилин");
    }
}
