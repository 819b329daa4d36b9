//! Interactive prompts that re-ask until the answer validates.
//!
//! Generic over the reader and writer so the loop can be driven from tests.
//! `Ok(None)` from any function here means the input was closed.

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::error::Result;
use crate::filter::FilterSpec;
use crate::validate::{parse_city, parse_day, parse_month, wants_restart};

/// Writes `question` and reads one line. `None` on end of input.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Asks `question` until `parse` accepts the answer.
pub fn ask_until<R, W, T>(
    input: &mut R,
    out: &mut W,
    question: &str,
    parse: impl Fn(&str) -> Result<T>,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = ask(input, out, question)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                debug!(error = %e, "Rejected answer");
                writeln!(out, "{e}. Please try again.\n")?;
            }
        }
    }
}

/// Collects a full [`FilterSpec`] from the user.
pub fn ask_filters<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<FilterSpec>> {
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;

    let Some(city) = ask_until(
        input,
        out,
        "Choose which city you want to examine (chicago, new york city, washington): ",
        parse_city,
    )?
    else {
        return Ok(None);
    };
    writeln!(out)?;

    let Some(month) = ask_until(
        input,
        out,
        "Choose which month to filter by (all, january, february, ..., june): ",
        parse_month,
    )?
    else {
        return Ok(None);
    };
    writeln!(out)?;

    let Some(day) = ask_until(
        input,
        out,
        "Choose which day of the week to filter by (all, monday, tuesday, ..., sunday): ",
        parse_day,
    )?
    else {
        return Ok(None);
    };
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(40))?;

    Ok(Some(FilterSpec { city, month, day }))
}

/// Asks whether to run again. End of input counts as "no".
pub fn ask_restart<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    let answer = ask(input, out, "\nWould you like to restart? Enter yes or no.\n")?;
    Ok(answer.as_deref().is_some_and(wants_restart))
}
