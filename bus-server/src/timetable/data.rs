//! The hand-curated city route timetable.
//!
//! One route crosses the town between the railway station and Верхня Немія.
//! Each stop lists its serviceable directions with the minute offset from
//! the trunk departure. Transfer stops are where a rider changes buses
//! mid-route; the timeline synthesis skips one trunk slot there.

use chrono::NaiveDate;

use crate::domain::TimeError;

use super::{CalendarTable, CalendarTables, HolidaySet, Stop, StopDirectory, Timetable};

/// Direction label: travelling towards Верхня Немія.
pub const TO_NEMIYA: &str = "До Верхньої Немії";
/// Direction label: travelling towards the railway station.
pub const TO_STATION: &str = "До залізничного вокзалу";

/// (stop name, offset towards Немія, offset towards the station)
///
/// Terminus stops carry only the direction leaving them.
const STOPS: &[(&str, Option<u32>, Option<u32>)] = &[
    ("Залізничний вокзал", Some(0), None),
    ("Автовокзал", Some(4), Some(34)),
    ("Ринок", Some(7), Some(31)),
    ("Центр", Some(10), Some(28)),
    ("Центральна площа", Some(12), Some(26)),
    ("Ощадбанк", Some(14), Some(24)),
    ("Школа № 2", Some(16), Some(22)),
    ("Монтажний технікум", Some(18), Some(20)),
    ("Машинобудівний завод", Some(21), Some(17)),
    ("Маслозавод", Some(23), Some(15)),
    ("Школа № 5", Some(25), Some(13)),
    ("Поліклініка", Some(27), Some(11)),
    ("Лікарня", Some(29), Some(9)),
    ("Парк Слави", Some(31), Some(7)),
    ("Немія", Some(33), Some(5)),
    ("Верхня Немія", None, Some(0)),
];

/// Stops at which the rider changes buses.
const TRANSFER_STOPS: &[&str] = &[
    "Ощадбанк",
    "Монтажний технікум",
    "Машинобудівний завод",
    "Школа № 5",
    "Лікарня",
    "Верхня Немія",
    "Залізничний вокзал",
    "Маслозавод",
    "Автовокзал",
    "Школа № 2",
];

const WORKDAY: &[&str] = &[
    "05:45", "06:20", "06:55", "07:30", "08:05", "08:40", "09:15", "09:50", "10:25", "11:00",
    "11:35", "12:10", "12:45", "13:20", "13:55", "14:30", "15:05", "15:40", "16:15", "16:50",
    "17:25", "18:00", "18:40", "19:20", "20:00",
];

const WEEKEND: &[&str] = &[
    "06:30", "07:30", "08:30", "09:30", "10:30", "11:30", "12:30", "13:30", "14:30", "15:30",
    "16:30", "17:30", "18:30", "19:30",
];

const HOLIDAY: &[&str] = &["07:00", "09:00", "11:00", "13:00", "15:00", "17:00", "19:00"];

/// (year, month, day) of dates served by the holiday schedule.
const HOLIDAYS: &[(i32, u32, u32)] = &[
    (2026, 1, 1),
    (2026, 1, 7),
    (2026, 3, 8),
    (2026, 5, 1),
    (2026, 5, 9),
    (2026, 6, 28),
    (2026, 8, 24),
    (2026, 12, 25),
];

/// Build the timetable from the tables above.
pub fn load() -> Result<Timetable, TimeError> {
    let stops = STOPS.iter().map(|&(name, to_nemiya, to_station)| {
        let directions = [
            to_nemiya.map(|off| (TO_NEMIYA, off)),
            to_station.map(|off| (TO_STATION, off)),
        ]
        .into_iter()
        .flatten();
        (name.to_string(), Stop::new(directions))
    });

    let directory = StopDirectory::new(stops, TRANSFER_STOPS.iter().map(|s| s.to_string()));

    let calendars = CalendarTables {
        workday: CalendarTable::parse(WORKDAY)?,
        weekend: CalendarTable::parse(WEEKEND)?,
        holiday: CalendarTable::parse(HOLIDAY)?,
        holidays: HolidaySet::new(
            HOLIDAYS
                .iter()
                .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        ),
    };

    Ok(Timetable {
        directory,
        calendars,
    })
}
