//! Bus schedule time handling.
//!
//! The timetable stores times as "HH:MM" strings. This module provides a
//! date-anchored time type for working with them: scheduled runs belong to a
//! civil date, but most schedule logic compares by time of day only, because
//! a midnight rollover reuses today's timeline as tomorrow's.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled moment: a time of day anchored to a civil date.
///
/// # Examples
///
/// ```
/// use bus_server::domain::BusTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let time = BusTime::parse_hhmm("06:35", date).unwrap();
/// assert_eq!(time.to_string(), "06:35");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusTime {
    date: NaiveDate,
    time: NaiveTime,
}

impl BusTime {
    /// Create a new BusTime from date and time components.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse a time from "HH:MM" format, anchored to the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::BusTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    ///
    /// assert!(BusTime::parse_hhmm("00:00", date).is_ok());
    /// assert!(BusTime::parse_hhmm("23:59", date).is_ok());
    ///
    /// assert!(BusTime::parse_hhmm("630", date).is_err());
    /// assert!(BusTime::parse_hhmm("6:30", date).is_err());
    /// assert!(BusTime::parse_hhmm("24:00", date).is_err());
    /// ```
    pub fn parse_hhmm(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        Ok(Self {
            date,
            time: parse_hhmm_time(s)?,
        })
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time-of-day component.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> chrono::NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Add whole minutes, carrying into the date when crossing midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::BusTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    /// let time = BusTime::parse_hhmm("23:50", date).unwrap();
    ///
    /// let later = time.checked_add_minutes(25).unwrap();
    /// assert_eq!(later.to_string(), "00:15");
    /// assert_eq!(later.date(), NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
    /// ```
    pub fn checked_add_minutes(&self, minutes: u32) -> Option<Self> {
        let dt = self
            .to_datetime()
            .checked_add_signed(Duration::minutes(i64::from(minutes)))?;
        Some(Self {
            date: dt.date(),
            time: dt.time(),
        })
    }

    /// Whole minutes from `now` until this moment, wrapped across midnight.
    ///
    /// A moment whose civil time is earlier than `now` counts as tomorrow's
    /// run, so the result is always in `0..24 * 60`. Sub-minute remainders
    /// are floored away.
    pub fn minutes_from(&self, now: chrono::NaiveDateTime) -> i64 {
        let mut delta = self.to_datetime().signed_duration_since(now);
        if delta < Duration::zero() {
            delta = delta + Duration::days(1);
        }
        delta.num_minutes()
    }
}

impl Ord for BusTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime().cmp(&other.to_datetime())
    }
}

impl PartialOrd for BusTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BusTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BusTime({} {:02}:{:02})",
            self.date,
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for BusTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse a bare "HH:MM" string into a time of day.
pub fn parse_hhmm_time(s: &str) -> Result<NaiveTime, TimeError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
