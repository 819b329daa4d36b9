use crate::analyzers::types::{Counted, Stat, StationPair, StationStats};
use crate::analyzers::utility::mode;
use crate::trips::TripTable;

/// Most used start station, end station and start → end pair.
///
/// Trips with a blank station are left out of every tally that needs it.
/// Ties go to the lexicographically smallest station or pair.
pub fn station_stats(table: &TripTable) -> StationStats {
    let schema = table.schema;
    let trips = &table.records;

    let owned = |c: Counted<&str>| Counted {
        value: c.value.to_string(),
        count: c.count,
    };

    let most_common_start = Stat::when(schema.start_station, || {
        mode(trips.iter().filter_map(|t| t.start_station.as_deref()))
            .map(owned)
            .into()
    });

    let most_common_end = Stat::when(schema.end_station, || {
        mode(trips.iter().filter_map(|t| t.end_station.as_deref()))
            .map(owned)
            .into()
    });

    let most_common_trip = Stat::when(schema.start_station && schema.end_station, || {
        let pairs = trips
            .iter()
            .filter_map(|t| Some((t.start_station.as_deref()?, t.end_station.as_deref()?)));
        mode(pairs)
            .map(|c| Counted {
                value: StationPair {
                    start: c.value.0.to_string(),
                    end: c.value.1.to_string(),
                },
                count: c.count,
            })
            .into()
    });

    StationStats {
        most_common_start,
        most_common_end,
        most_common_trip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::{full_table, ride, trip};
    use crate::city::City;
    use crate::trips::{Schema, TripTable};
    use std::collections::HashMap;

    #[test]
    fn test_most_common_pair() {
        let table = full_table(vec![ride("A", "B"), ride("A", "B"), ride("A", "C")]);
        let stats = station_stats(&table);

        assert_eq!(
            stats.most_common_trip,
            Stat::Available(Counted {
                value: StationPair {
                    start: "A".into(),
                    end: "B".into()
                },
                count: 2
            })
        );
        assert_eq!(
            stats.most_common_start,
            Stat::Available(Counted {
                value: "A".into(),
                count: 3
            })
        );
        assert_eq!(
            stats.most_common_end.available().map(|c| c.value.as_str()),
            Some("B")
        );
    }

    #[test]
    fn test_pair_is_ordered() {
        // B→A and A→B are different trips
        let table = full_table(vec![ride("B", "A"), ride("A", "B"), ride("B", "A")]);
        let trip = station_stats(&table).most_common_trip;
        let pair = &trip.available().unwrap().value;
        assert_eq!((pair.start.as_str(), pair.end.as_str()), ("B", "A"));
    }

    #[test]
    fn test_tie_is_lexicographic() {
        let table = full_table(vec![ride("Z", "Y"), ride("M", "N"), ride("M", "A")]);
        let trip = station_stats(&table).most_common_trip;
        let pair = &trip.available().unwrap().value;
        assert_eq!((pair.start.as_str(), pair.end.as_str()), ("M", "A"));
    }

    #[test]
    fn test_chosen_pair_count_is_maximal() {
        let table = full_table(vec![
            ride("A", "B"),
            ride("C", "D"),
            ride("C", "D"),
            ride("A", "B"),
            ride("C", "D"),
            ride("E", "F"),
        ]);
        let best = station_stats(&table).most_common_trip;
        let best = best.available().unwrap();

        let mut counts: HashMap<(String, String), usize> = HashMap::new();
        for t in &table.records {
            let key = (t.start_station.clone().unwrap(), t.end_station.clone().unwrap());
            *counts.entry(key).or_default() += 1;
        }
        assert!(counts.values().all(|&n| best.count >= n));
        assert_eq!(best.count, 3);
    }

    #[test]
    fn test_blank_stations_skipped() {
        let mut blank_end = ride("A", "B");
        blank_end.end_station = None;
        let table = full_table(vec![blank_end, ride("C", "D")]);
        let stats = station_stats(&table);

        assert_eq!(
            stats.most_common_start.available().map(|c| c.value.as_str()),
            Some("A")
        );
        assert_eq!(
            stats.most_common_trip.available().map(|c| c.count),
            Some(1)
        );
        assert_eq!(
            stats.most_common_trip.available().map(|c| c.value.start.as_str()),
            Some("C")
        );
    }

    #[test]
    fn test_all_blank_is_no_data() {
        let table = full_table(vec![trip("2017-01-02 09:00:00")]);
        let stats = station_stats(&table);
        assert_eq!(stats.most_common_start, Stat::NoData);
        assert_eq!(stats.most_common_trip, Stat::NoData);
    }

    #[test]
    fn test_missing_columns_unavailable() {
        let table = TripTable::new(City::Washington, Schema::default(), vec![ride("A", "B")]);
        let stats = station_stats(&table);
        assert_eq!(stats.most_common_start, Stat::Unavailable);
        assert_eq!(stats.most_common_end, Stat::Unavailable);
        assert_eq!(stats.most_common_trip, Stat::Unavailable);
    }
}
