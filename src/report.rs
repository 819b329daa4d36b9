//! One full pass of the pipeline: load, filter, then run every aggregator
//! with its wall-clock time recorded.

use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use tracing::info;

use crate::analyzers::types::{DurationStats, StationStats, TimeStats, UserStats};
use crate::analyzers::{duration_stats, station_stats, time_stats, user_stats};
use crate::city::CityTable;
use crate::error::Result;
use crate::filter::{FilterSpec, filter_trips};
use crate::loader::load_city;
use crate::trips::TripTable;

/// An aggregator result and how long it took.
#[derive(Debug, Clone, Serialize)]
pub struct Timed<T> {
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    pub stats: T,
}

fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

fn timed<T>(run: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let stats = run();
    Timed {
        elapsed: start.elapsed(),
        stats,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TripReport {
    pub filter: FilterSpec,
    /// Trips left after filtering.
    pub trips: usize,
    pub times: Timed<TimeStats>,
    pub stations: Timed<StationStats>,
    pub durations: Timed<DurationStats>,
    pub users: Timed<UserStats>,
}

/// Runs the four aggregators over an already filtered table.
pub fn summarize(table: &TripTable, filter: FilterSpec) -> TripReport {
    TripReport {
        filter,
        trips: table.len(),
        times: timed(|| time_stats(table)),
        stations: timed(|| station_stats(table)),
        durations: timed(|| duration_stats(table)),
        users: timed(|| user_stats(table)),
    }
}

/// Loads the city named in `filter`, narrows it and summarizes the result.
pub fn explore(cities: &CityTable, filter: FilterSpec) -> Result<TripReport> {
    let table = load_city(cities, filter.city)?;
    let filtered = filter_trips(&table, &filter);
    let report = summarize(&filtered, filter);
    info!(
        %filter,
        loaded = table.len(),
        matched = report.trips,
        "Report built"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::{full_table, trip};
    use crate::analyzers::types::Stat;
    use crate::city::City;

    #[test]
    fn test_empty_table_yields_defined_report() {
        let report = summarize(&full_table(vec![]), FilterSpec::all(City::Chicago));

        assert_eq!(report.trips, 0);
        assert_eq!(report.times.stats.most_common_month, Stat::NoData);
        assert_eq!(report.stations.stats.most_common_trip, Stat::NoData);
        assert_eq!(report.durations.stats.total_hours, Stat::NoData);
        assert_eq!(report.users.stats.user_types, Stat::NoData);
    }

    #[test]
    fn test_report_serializes_elapsed_as_seconds() {
        let report = summarize(
            &full_table(vec![trip("2017-01-02 09:00:00")]),
            FilterSpec::all(City::Chicago),
        );
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["times"]["elapsed_secs"].is_f64());
        assert_eq!(json["filter"]["city"], "chicago");
        assert_eq!(json["filter"]["month"], serde_json::Value::Null);
        assert_eq!(json["times"]["stats"]["most_common_hour"]["status"], "available");
        assert_eq!(json["times"]["stats"]["most_common_hour"]["value"]["value"], 9);
    }
}
