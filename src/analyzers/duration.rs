use tracing::warn;

use crate::analyzers::types::{DurationStats, Stat};
use crate::analyzers::utility::mean;
use crate::trips::TripTable;

/// Total trip time in hours and mean trip time in minutes.
///
/// Only trips with an end time are measured. Trips that end before they
/// start are summed as-is and counted in `negative_trips`.
pub fn duration_stats(table: &TripTable) -> DurationStats {
    if !table.schema.end_time {
        return DurationStats {
            total_hours: Stat::Unavailable,
            mean_minutes: Stat::Unavailable,
            measured_trips: 0,
            negative_trips: 0,
        };
    }

    let seconds: Vec<f64> = table
        .records
        .iter()
        .filter_map(|t| Some((t.end_time? - t.start_time).num_seconds() as f64))
        .collect();

    let negative_trips = seconds.iter().filter(|s| **s < 0.0).count();
    if negative_trips > 0 {
        warn!(
            city = %table.city,
            negative_trips,
            "Trips ending before they start were included in duration totals"
        );
    }

    let (total_hours, mean_minutes) = if seconds.is_empty() {
        (Stat::NoData, Stat::NoData)
    } else {
        (
            Stat::Available(seconds.iter().sum::<f64>() / 3600.0),
            Stat::Available(mean(&seconds) / 60.0),
        )
    };

    DurationStats {
        total_hours,
        mean_minutes,
        measured_trips: seconds.len(),
        negative_trips,
    }
}
