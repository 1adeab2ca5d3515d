//! Trunk schedule calendars and day-kind selection.
//!
//! Every stop's arrivals are derived from one shared trunk schedule: an
//! ordered list of base departure times. Three variants exist (workday,
//! weekend, holiday) and the calendar date picks which one applies.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::domain::{TimeError, parse_hhmm_time};

/// Which trunk schedule variant applies to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Workday,
    Weekend,
    Holiday,
}

/// One ordered trunk schedule.
///
/// Times are sorted ascending at construction. Duplicates are allowed: two
/// runs at the same base time are distinct buses, told apart by their
/// position in the list.
#[derive(Debug, Clone, Default)]
pub struct CalendarTable {
    times: Vec<NaiveTime>,
}

impl CalendarTable {
    /// Parse a table from "HH:MM" strings, sorting ascending.
    pub fn parse(entries: &[&str]) -> Result<Self, TimeError> {
        let mut times = entries
            .iter()
            .map(|s| parse_hhmm_time(s))
            .collect::<Result<Vec<_>, _>>()?;
        times.sort();
        Ok(Self { times })
    }

    /// The base departure times, ascending.
    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Calendar dates on which the holiday schedule applies regardless of
/// weekday.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// The three trunk schedule variants plus the holiday override dates.
#[derive(Debug, Clone)]
pub struct CalendarTables {
    pub workday: CalendarTable,
    pub weekend: CalendarTable,
    pub holiday: CalendarTable,
    pub holidays: HolidaySet,
}

impl CalendarTables {
    /// Classify a date: holiday override first, then Mon-Fri vs weekend.
    pub fn day_kind(&self, date: NaiveDate) -> DayKind {
        if self.holidays.contains(date) {
            DayKind::Holiday
        } else if date.weekday().num_days_from_monday() < 5 {
            DayKind::Workday
        } else {
            DayKind::Weekend
        }
    }

    /// The trunk schedule applicable on a date. Always succeeds; an empty
    /// table just yields an empty timeline downstream.
    pub fn for_date(&self, date: NaiveDate) -> &CalendarTable {
        match self.day_kind(date) {
            DayKind::Workday => &self.workday,
            DayKind::Weekend => &self.weekend,
            DayKind::Holiday => &self.holiday,
        }
    }
}
