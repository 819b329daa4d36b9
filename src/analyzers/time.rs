use crate::analyzers::types::{Counted, Stat, TimeStats};
use crate::analyzers::utility::mode;
use crate::trips::{TripTable, WEEKDAYS, day_name, month_name};

/// Most common month, weekday and start hour.
///
/// Ties resolve to the earliest month, the earliest weekday counting from
/// Monday, and the earliest hour.
pub fn time_stats(table: &TripTable) -> TimeStats {
    let trips = &table.records;

    let month = mode(trips.iter().map(|t| t.month())).map(|m| Counted {
        value: month_name(m.value).to_string(),
        count: m.count,
    });

    let day = mode(trips.iter().map(|t| t.weekday().num_days_from_monday() as usize)).map(|d| {
        Counted {
            value: day_name(WEEKDAYS[d.value]).to_string(),
            count: d.count,
        }
    });

    TimeStats {
        most_common_month: month.into(),
        most_common_day: day.into(),
        most_common_hour: Stat::from(mode(trips.iter().map(|t| t.hour()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::{full_table, trip};

    #[test]
    fn test_most_common_month_day_hour() {
        // Jan 2 and Jan 9 2017 are Mondays, Feb 3 a Friday
        let table = full_table(vec![
            trip("2017-01-02 08:15:00"),
            trip("2017-02-03 17:00:00"),
            trip("2017-01-09 08:45:00"),
        ]);
        let stats = time_stats(&table);

        assert_eq!(
            stats.most_common_month,
            Stat::Available(Counted {
                value: "January".to_string(),
                count: 2
            })
        );
        assert_eq!(
            stats.most_common_day.available().map(|c| c.value.as_str()),
            Some("Monday")
        );
        assert_eq!(
            stats.most_common_hour,
            Stat::Available(Counted { value: 8, count: 2 })
        );
    }

    #[test]
    fn test_ties_pick_earliest() {
        // Tuesday in March, Monday in February
        let table = full_table(vec![
            trip("2017-03-07 23:00:00"),
            trip("2017-02-06 05:00:00"),
        ]);
        let stats = time_stats(&table);

        assert_eq!(
            stats.most_common_month.available().map(|c| c.value.as_str()),
            Some("February")
        );
        assert_eq!(
            stats.most_common_day.available().map(|c| c.value.as_str()),
            Some("Monday")
        );
        assert_eq!(stats.most_common_hour.available().map(|c| c.value), Some(5));
    }

    #[test]
    fn test_empty_table_is_no_data() {
        let stats = time_stats(&full_table(vec![]));
        assert_eq!(stats.most_common_month, Stat::NoData);
        assert_eq!(stats.most_common_day, Stat::NoData);
        assert_eq!(stats.most_common_hour, Stat::NoData);
    }
}
