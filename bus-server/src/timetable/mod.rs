//! Static timetable data: stop directory, trunk calendars, holidays.
//!
//! Everything here is loaded once at startup and shared read-only for the
//! process lifetime.

mod calendar;
pub mod data;
mod directory;

pub use calendar::{CalendarTable, CalendarTables, DayKind, HolidaySet};
pub use directory::{Stop, StopDirectory, StopLookup};

/// The full hand-curated timetable.
#[derive(Debug, Clone)]
pub struct Timetable {
    pub directory: StopDirectory,
    pub calendars: CalendarTables,
}
