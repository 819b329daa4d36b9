//! In-memory trip records and the per-dataset schema descriptor.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::city::City;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekdays in calendar order starting from Monday.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Title-cased name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Title-cased weekday name, e.g. `Monday`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One rental.
///
/// Month, weekday and hour are always derived from `start_time` and never
/// stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    pub fn new(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time: None,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    /// Month number in `1..=12`.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of day in `0..=23`.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Which optional columns a dataset carries.
///
/// Aggregators consult this before computing a dependent statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub end_time: bool,
    pub start_station: bool,
    pub end_station: bool,
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl Schema {
    /// Every optional column present.
    pub fn full() -> Self {
        Self {
            end_time: true,
            start_station: true,
            end_station: true,
            user_type: true,
            gender: true,
            birth_year: true,
        }
    }
}

/// Trips for one city sharing a single schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub schema: Schema,
    pub records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, schema: Schema, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            schema,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_derived_fields_follow_start_time() {
        let trip = TripRecord::new(at("2017-06-23 15:09:32"));
        assert_eq!(trip.month(), 6);
        assert_eq!(trip.weekday(), Weekday::Fri);
        assert_eq!(trip.hour(), 15);
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }

    #[test]
    fn test_day_name() {
        assert_eq!(day_name(Weekday::Sun), "Sunday");
        assert_eq!(day_name(Weekday::Wed), "Wednesday");
    }
}
