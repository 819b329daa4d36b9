//! Validation of the answers typed at the prompts.
//!
//! Each function maps raw input to a value from a closed set or to
//! [`BikeshareError::InvalidUserInput`] naming the valid choices. Filter answers
//! are trimmed and compared case-insensitively; the restart answer is not
//! trimmed.

use chrono::Weekday;

use crate::city::City;
use crate::error::{BikeshareError, Result};
use crate::filter::Month;
use crate::trips::{WEEKDAYS, day_name};

const ALL: &str = "all";

fn invalid(field: &'static str, value: &str, choices: Vec<String>) -> BikeshareError {
    BikeshareError::InvalidUserInput {
        field,
        value: value.trim().to_string(),
        choices: choices.join(", "),
    }
}

pub fn city_choices() -> Vec<String> {
    City::ALL.iter().map(|c| c.name().to_string()).collect()
}

pub fn month_choices() -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(Month::ALL.iter().map(|m| m.name().to_string()))
        .collect()
}

pub fn day_choices() -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(WEEKDAYS.iter().map(|d| day_name(*d).to_lowercase()))
        .collect()
}

pub fn parse_city(input: &str) -> Result<City> {
    City::from_name(input).ok_or_else(|| invalid("city", input, city_choices()))
}

/// `Ok(None)` means no month filter.
pub fn parse_month(input: &str) -> Result<Option<Month>> {
    let value = input.trim().to_lowercase();
    if value == ALL {
        return Ok(None);
    }
    Month::ALL
        .into_iter()
        .find(|m| m.name() == value)
        .map(Some)
        .ok_or_else(|| invalid("month", input, month_choices()))
}

/// `Ok(None)` means no day filter.
pub fn parse_day(input: &str) -> Result<Option<Weekday>> {
    let value = input.trim().to_lowercase();
    if value == ALL {
        return Ok(None);
    }
    WEEKDAYS
        .into_iter()
        .find(|d| day_name(*d).eq_ignore_ascii_case(&value))
        .map(Some)
        .ok_or_else(|| invalid("day", input, day_choices()))
}

/// Only an exact `yes`, in any case, asks for another run. Padding counts
/// against the answer.
pub fn wants_restart(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}
