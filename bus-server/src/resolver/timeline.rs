//! Timeline synthesis: one stop's full arrival list for a day.
//!
//! Walks the trunk schedule and emits one arrival per (direction, offset)
//! pair of the stop. The bus number is positional: trunk index parity,
//! alternating 1/2. It identifies a run within the day's layout, not a
//! physical vehicle.

use chrono::NaiveDate;

use crate::domain::{BusTime, TimeError};
use crate::timetable::{CalendarTable, Stop};

/// One synthesized arrival at the resolved stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalEvent {
    pub direction: String,
    /// Positional run number derived from trunk index parity.
    pub bus_number: u8,
    pub arrival: BusTime,
}

/// Generate every arrival at `stop` for the given date.
///
/// At a transfer stop the rider changes buses once mid-route, which the
/// original timetable models as skipping one extra trunk slot. The skip
/// fires at most once per synthesis run, after the current slot's events
/// have been emitted.
///
/// Output order is unspecified; callers sort by time of day.
pub fn synthesize(
    trunk: &CalendarTable,
    stop: &Stop,
    date: NaiveDate,
    is_transfer: bool,
) -> Result<Vec<ArrivalEvent>, TimeError> {
    let times = trunk.times();
    let mut events = Vec::with_capacity(times.len() * stop.directions.len());
    let mut skipped = false;
    let mut index = 0;

    while index < times.len() {
        let bus_number = (index % 2) as u8 + 1;
        let departure = BusTime::new(date, times[index]);

        for (direction, offset) in &stop.directions {
            let arrival = departure
                .checked_add_minutes(*offset)
                .ok_or_else(|| TimeError::new("arrival time overflow"))?;
            events.push(ArrivalEvent {
                direction: direction.clone(),
                bus_number,
                arrival,
            });
        }

        if is_transfer && !skipped {
            index += 1;
            skipped = true;
        }
        index += 1;
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn trunk(entries: &[&str]) -> CalendarTable {
        CalendarTable::parse(entries).unwrap()
    }

    fn rendered(events: &[ArrivalEvent]) -> Vec<(String, u8, String)> {
        events
            .iter()
            .map(|e| (e.direction.clone(), e.bus_number, e.arrival.to_string()))
            .collect()
    }

    #[test]
    fn offsets_and_bus_numbers() {
        let trunk = trunk(&["06:00", "06:30", "07:00"]);
        let stop = Stop::new([("На північ", 5)]);

        let events = synthesize(&trunk, &stop, date(), false).unwrap();

        assert_eq!(
            rendered(&events),
            [
                ("На північ".to_string(), 1, "06:05".to_string()),
                ("На північ".to_string(), 2, "06:35".to_string()),
                ("На північ".to_string(), 1, "07:05".to_string()),
            ]
        );
    }

    #[test]
    fn every_direction_emits_per_slot() {
        let trunk = trunk(&["06:00", "07:00"]);
        let stop = Stop::new([("На північ", 5), ("На південь", 10)]);

        let events = synthesize(&trunk, &stop, date(), false).unwrap();

        assert_eq!(events.len(), 4);
        // Both directions share the slot's bus number.
        assert!(events.iter().all(|e| e.bus_number == 1 || e.bus_number == 2));
        assert_eq!(events.iter().filter(|e| e.bus_number == 1).count(), 2);
    }

    #[test]
    fn transfer_skips_exactly_one_slot() {
        let trunk = trunk(&["06:00", "06:30", "07:00", "07:30"]);
        let stop = Stop::new([("На північ", 0)]);

        let events = synthesize(&trunk, &stop, date(), true).unwrap();

        // Slot 0 emits, slot 1 is skipped once, then every slot emits.
        assert_eq!(
            rendered(&events),
            [
                ("На північ".to_string(), 1, "06:00".to_string()),
                ("На північ".to_string(), 1, "07:00".to_string()),
                ("На північ".to_string(), 2, "07:30".to_string()),
            ]
        );
    }

    #[test]
    fn transfer_skip_on_single_slot_trunk() {
        let trunk = trunk(&["06:00"]);
        let stop = Stop::new([("На північ", 0)]);

        let events = synthesize(&trunk, &stop, date(), true).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn no_directions_means_no_events() {
        let trunk = trunk(&["06:00", "06:30"]);
        let stop = Stop::default();

        let events = synthesize(&trunk, &stop, date(), false).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn empty_trunk_means_no_events() {
        let trunk = CalendarTable::default();
        let stop = Stop::new([("На північ", 5)]);

        let events = synthesize(&trunk, &stop, date(), false).unwrap();
        assert!(events.is_empty());
    }
}
