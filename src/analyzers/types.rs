//! Result types produced by the aggregators.

use serde::Serialize;

/// Outcome of a single statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Stat<T> {
    Available(T),
    /// The filtered table has no usable values for this statistic.
    NoData,
    /// The dataset has no column this statistic depends on.
    Unavailable,
}

impl<T> Stat<T> {
    /// `Unavailable` unless `present`, otherwise the result of `compute`.
    pub fn when(present: bool, compute: impl FnOnce() -> Stat<T>) -> Stat<T> {
        if present { compute() } else { Stat::Unavailable }
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Stat::Available(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Stat<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Stat::NoData, Stat::Available)
    }
}

/// A value with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counted<T> {
    pub value: T,
    pub count: usize,
}

/// An ordered start → end station pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub most_common_month: Stat<Counted<String>>,
    pub most_common_day: Stat<Counted<String>>,
    pub most_common_hour: Stat<Counted<u32>>,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub most_common_start: Stat<Counted<String>>,
    pub most_common_end: Stat<Counted<String>>,
    pub most_common_trip: Stat<Counted<StationPair>>,
}

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_hours: Stat<f64>,
    pub mean_minutes: Stat<f64>,
    /// Trips with both timestamps.
    pub measured_trips: usize,
    /// Trips ending before they start. Included in the totals.
    pub negative_trips: usize,
}

/// Rider breakdowns and birth-year extremes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Stat<Vec<Counted<String>>>,
    pub genders: Stat<Vec<Counted<String>>>,
    pub earliest_birth_year: Stat<i32>,
    pub most_recent_birth_year: Stat<i32>,
    pub most_common_birth_year: Stat<Counted<i32>>,
}
