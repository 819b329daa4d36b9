//! Month and day-of-week filtering over a loaded [`TripTable`].

use chrono::Weekday;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

use crate::city::City;
use crate::trips::{TripTable, day_name};

/// The months the trip logs cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Lowercase name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

/// A validated filter selection. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub city: City,
    pub month: Option<Month>,
    #[serde(serialize_with = "serialize_day")]
    pub day: Option<Weekday>,
}

fn serialize_day<S: Serializer>(day: &Option<Weekday>, s: S) -> Result<S::Ok, S::Error> {
    match day {
        Some(d) => s.serialize_some(day_name(*d)),
        None => s.serialize_none(),
    }
}

impl FilterSpec {
    pub fn all(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn month_label(&self) -> &'static str {
        self.month.map(Month::name).unwrap_or("all")
    }

    pub fn day_label(&self) -> &'static str {
        self.day.map(day_name).unwrap_or("all")
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={}",
            self.city,
            self.month_label(),
            self.day_label()
        )
    }
}

/// Returns the trips whose start month and weekday match `spec`.
///
/// An empty result is a valid outcome, not an error.
#[tracing::instrument(skip_all, fields(rows_in = table.len(), spec = %spec))]
pub fn filter_trips(table: &TripTable, spec: &FilterSpec) -> TripTable {
    let records: Vec<_> = table
        .records
        .iter()
        .filter(|t| spec.month.is_none_or(|m| t.month() == m.number()))
        .filter(|t| spec.day.is_none_or(|d| t.weekday() == d))
        .cloned()
        .collect();

    debug!(rows_out = records.len(), "Filter applied");
    TripTable::new(table.city, table.schema, records)
}
