use crate::analyzers::types::{Counted, Stat, UserStats};
use crate::analyzers::utility::{mode, value_counts};
use crate::trips::TripTable;

/// Counts by user type and gender, plus the oldest, youngest and most common
/// birth years.
pub fn user_stats(table: &TripTable) -> UserStats {
    let schema = table.schema;
    let trips = &table.records;

    let breakdown = |counts: Vec<Counted<String>>| {
        if counts.is_empty() {
            Stat::NoData
        } else {
            Stat::Available(counts)
        }
    };

    let user_types = Stat::when(schema.user_type, || {
        breakdown(value_counts(
            trips.iter().filter_map(|t| t.user_type.as_deref()),
        ))
    });

    let genders = Stat::when(schema.gender, || {
        breakdown(value_counts(trips.iter().filter_map(|t| t.gender.as_deref())))
    });

    let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
    let earliest_birth_year =
        Stat::when(schema.birth_year, || years.iter().copied().min().into());
    let most_recent_birth_year =
        Stat::when(schema.birth_year, || years.iter().copied().max().into());
    let most_common_birth_year =
        Stat::when(schema.birth_year, || mode(years.iter().copied()).into());

    UserStats {
        user_types,
        genders,
        earliest_birth_year,
        most_recent_birth_year,
        most_common_birth_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::{full_table, trip};
    use crate::city::City;
    use crate::trips::{Schema, TripRecord, TripTable};

    fn rider(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
        TripRecord {
            user_type: Some(user_type.to_string()),
            gender: gender.map(str::to_string),
            birth_year,
            ..trip("2017-04-10 12:00:00")
        }
    }

    #[test]
    fn test_breakdowns_and_birth_years() {
        let table = full_table(vec![
            rider("Subscriber", Some("Male"), Some(1985)),
            rider("Customer", None, None),
            rider("Subscriber", Some("Female"), Some(1992)),
            rider("Subscriber", Some("Male"), Some(1985)),
            rider("Customer", Some("Female"), Some(1949)),
        ]);
        let stats = user_stats(&table);

        let types = stats.user_types.available().unwrap();
        assert_eq!(types[0].value, "Subscriber");
        assert_eq!(types[0].count, 3);
        assert_eq!(types[1].value, "Customer");
        assert_eq!(types[1].count, 2);

        // Male and Female tie at two; Male was seen first
        let genders = stats.genders.available().unwrap();
        let flat: Vec<_> = genders.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(flat, vec![("Male", 2), ("Female", 2)]);

        assert_eq!(stats.earliest_birth_year, Stat::Available(1949));
        assert_eq!(stats.most_recent_birth_year, Stat::Available(1992));
        assert_eq!(
            stats.most_common_birth_year,
            Stat::Available(Counted {
                value: 1985,
                count: 2
            })
        );
    }

    #[test]
    fn test_birth_years_bound_every_row() {
        let years = [1971, 2001, 1960, 1988, 1988];
        let table = full_table(
            years
                .iter()
                .map(|y| rider("Subscriber", Some("Male"), Some(*y)))
                .collect(),
        );
        let stats = user_stats(&table);
        let min = *stats.earliest_birth_year.available().unwrap();
        let max = *stats.most_recent_birth_year.available().unwrap();

        assert!(years.iter().all(|y| min <= *y && *y <= max));
    }

    #[test]
    fn test_missing_columns_unavailable_but_user_types_kept() {
        let schema = Schema {
            gender: false,
            birth_year: false,
            ..Schema::full()
        };
        let table = TripTable::new(
            City::Washington,
            schema,
            vec![rider("Subscriber", None, None)],
        );
        let stats = user_stats(&table);

        assert_eq!(stats.user_types.available().map(Vec::len), Some(1));
        assert_eq!(stats.genders, Stat::Unavailable);
        assert_eq!(stats.earliest_birth_year, Stat::Unavailable);
        assert_eq!(stats.most_recent_birth_year, Stat::Unavailable);
        assert_eq!(stats.most_common_birth_year, Stat::Unavailable);
    }

    #[test]
    fn test_empty_table_is_no_data() {
        let stats = user_stats(&full_table(vec![]));
        assert_eq!(stats.user_types, Stat::NoData);
        assert_eq!(stats.genders, Stat::NoData);
        assert_eq!(stats.earliest_birth_year, Stat::NoData);
        assert_eq!(stats.most_common_birth_year, Stat::NoData);
    }
}
