//! CSV loading for city trip logs.
//!
//! Reads every row of a city's file into a [`TripTable`], parsing timestamps
//! with the fixed `YYYY-MM-DD HH:MM:SS` layout. Station and user fields are
//! passed through untouched; blank cells become `None`.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::city::{City, CityTable};
use crate::error::{BikeshareError, Result};
use crate::trips::{Schema, TripRecord, TripTable};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// A single row as it appears in the CSV, before timestamp parsing.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Resolves `city` through `cities` and loads its file.
pub fn load_city(cities: &CityTable, city: City) -> Result<TripTable> {
    load_trips(&cities.path_for(city), city)
}

/// Loads all trips from the CSV at `path`.
///
/// # Errors
///
/// Returns [`BikeshareError::Io`] if the file cannot be opened,
/// [`BikeshareError::MissingColumn`] if there is no `Start Time` column, and
/// [`BikeshareError::DataFormat`] for the first timestamp or birth year that
/// does not parse.
#[tracing::instrument(skip_all, fields(city = %city, path = %path.display()))]
pub fn load_trips(path: &Path, city: City) -> Result<TripTable> {
    let file = File::open(path).map_err(|source| BikeshareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_trips(file, path, city)?;
    info!(rows = table.len(), "Trip file loaded");
    Ok(table)
}

/// Reads trips from any CSV source. `path` is used only in error messages.
pub fn read_trips<R: Read>(reader: R, path: &Path, city: City) -> Result<TripTable> {
    let csv_err = |source| BikeshareError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?;
    let has = |name: &str| headers.iter().any(|h| h == name);

    if !has(START_TIME) {
        return Err(BikeshareError::MissingColumn {
            path: path.to_path_buf(),
            column: START_TIME,
        });
    }

    let schema = Schema {
        end_time: has(END_TIME),
        start_station: has(START_STATION),
        end_station: has(END_STATION),
        user_type: has(USER_TYPE),
        gender: has(GENDER),
        birth_year: has(BIRTH_YEAR),
    };
    debug!(?schema, "Detected columns");

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let raw: RawTrip = result.map_err(csv_err)?;
        // header is line 1
        let row = i + 2;
        records.push(parse_row(raw, path, row)?);
    }

    Ok(TripTable::new(city, schema, records))
}

fn parse_row(raw: RawTrip, path: &Path, row: usize) -> Result<TripRecord> {
    let bad = |field: &'static str, value: &str| BikeshareError::DataFormat {
        path: path.to_path_buf(),
        row,
        field,
        value: value.to_string(),
    };

    let start_time = NaiveDateTime::parse_from_str(&raw.start_time, TIMESTAMP_FORMAT)
        .map_err(|_| bad(START_TIME, &raw.start_time))?;

    let end_time = match raw.end_time.as_deref() {
        Some(s) => Some(
            NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|_| bad(END_TIME, s))?,
        ),
        None => None,
    };

    // Source files store years as floats, e.g. `1992.0`.
    let birth_year = match raw.birth_year.as_deref() {
        Some(s) => {
            let year: f64 = s.trim().parse().map_err(|_| bad(BIRTH_YEAR, s))?;
            let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year);
            if !in_range || year.fract() != 0.0 {
                return Err(bad(BIRTH_YEAR, s));
            }
            Some(year as i32)
        }
        None => None,
    };

    Ok(TripRecord {
        start_time,
        end_time,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year,
    })
}
