//! Output formatting and persistence for trip reports.
//!
//! Supports plain-text rendering, JSON serialization, and CSV append of a
//! one-row summary per run.

use anyhow::Result;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::analyzers::types::{Counted, Stat};
use crate::report::TripReport;

const RULE_WIDTH: usize = 40;
const NO_DATA: &str = "no data for this selection";
const UNAVAILABLE: &str = "not available for this city";

fn describe<T>(stat: &Stat<T>, show: impl FnOnce(&T) -> String) -> String {
    match stat {
        Stat::Available(v) => show(v),
        Stat::NoData => NO_DATA.to_string(),
        Stat::Unavailable => UNAVAILABLE.to_string(),
    }
}

fn counted<T: std::fmt::Display>(c: &Counted<T>) -> String {
    format!("{} (count: {})", c.value, c.count)
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH) + "\n"
}

fn section(out: &mut String, title: &str, elapsed: Duration, lines: &[String]) {
    out.push_str(&format!("\n{title}...\n\n"));
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("\nThis took {} seconds.\n", elapsed.as_secs_f64()));
    out.push_str(&rule());
}

fn breakdown(out: &mut Vec<String>, heading: &str, stat: &Stat<Vec<Counted<String>>>) {
    match stat {
        Stat::Available(counts) => {
            out.push(format!("{heading}:"));
            out.extend(counts.iter().map(|c| format!("  {}: {}", c.value, c.count)));
        }
        other => out.push(format!("{heading}: {}", describe(other, |_| String::new()))),
    }
}

/// Renders every section of `report` as human-readable text.
pub fn render_text(report: &TripReport) -> String {
    let mut out = format!(
        "Exploring {} trips for {} (month: {}, day: {})\n",
        report.trips,
        report.filter.city,
        report.filter.month_label(),
        report.filter.day_label()
    );
    out.push_str(&rule());

    let t = &report.times.stats;
    section(
        &mut out,
        "Calculating The Most Frequent Times of Travel",
        report.times.elapsed,
        &[
            format!(
                "Most common month for borrowing: {}",
                describe(&t.most_common_month, counted)
            ),
            format!(
                "Most common day to borrow: {}",
                describe(&t.most_common_day, counted)
            ),
            format!(
                "Most common hour to borrow: {}",
                describe(&t.most_common_hour, counted)
            ),
        ],
    );

    let s = &report.stations.stats;
    section(
        &mut out,
        "Calculating The Most Popular Stations and Trip",
        report.stations.elapsed,
        &[
            format!(
                "Most commonly used start station: {}",
                describe(&s.most_common_start, counted)
            ),
            format!(
                "Most commonly used end station: {}",
                describe(&s.most_common_end, counted)
            ),
            format!(
                "Most frequent trip: {}",
                describe(&s.most_common_trip, |c| format!(
                    "{} -> {} (count: {})",
                    c.value.start, c.value.end, c.count
                ))
            ),
        ],
    );

    let d = &report.durations.stats;
    let mut duration_lines = vec![
        format!(
            "Total travel time: {}",
            describe(&d.total_hours, |h| format!("{h:.2} hours"))
        ),
        format!(
            "Mean travel time: {}",
            describe(&d.mean_minutes, |m| format!("{m:.2} minutes"))
        ),
    ];
    if d.negative_trips > 0 {
        duration_lines.push(format!(
            "Warning: {} of {} trips end before they start",
            d.negative_trips, d.measured_trips
        ));
    }
    section(
        &mut out,
        "Calculating Trip Duration",
        report.durations.elapsed,
        &duration_lines,
    );

    let u = &report.users.stats;
    let mut user_lines = Vec::new();
    breakdown(&mut user_lines, "User types", &u.user_types);
    breakdown(&mut user_lines, "Gender", &u.genders);
    user_lines.push(format!(
        "Earliest year of birth: {}",
        describe(&u.earliest_birth_year, i32::to_string)
    ));
    user_lines.push(format!(
        "Most recent year of birth: {}",
        describe(&u.most_recent_birth_year, i32::to_string)
    ));
    user_lines.push(format!(
        "Most common year of birth: {}",
        describe(&u.most_common_birth_year, counted)
    ));
    section(
        &mut out,
        "Calculating User Stats",
        report.users.elapsed,
        &user_lines,
    );

    out
}

/// Pretty-printed JSON for `report`.
pub fn render_json(report: &TripReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One CSV row per run.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    city: &'a str,
    month: &'a str,
    day: &'a str,
    trips: usize,
    most_common_month: Option<&'a str>,
    most_common_day: Option<&'a str>,
    most_common_hour: Option<u32>,
    most_common_start_station: Option<&'a str>,
    most_common_end_station: Option<&'a str>,
    total_hours: Option<f64>,
    mean_minutes: Option<f64>,
    earliest_birth_year: Option<i32>,
    most_recent_birth_year: Option<i32>,
}

impl<'a> From<&'a TripReport> for SummaryRow<'a> {
    fn from(r: &'a TripReport) -> Self {
        let t = &r.times.stats;
        let s = &r.stations.stats;
        let d = &r.durations.stats;
        let u = &r.users.stats;
        Self {
            city: r.filter.city.name(),
            month: r.filter.month_label(),
            day: r.filter.day_label(),
            trips: r.trips,
            most_common_month: t.most_common_month.available().map(|c| c.value.as_str()),
            most_common_day: t.most_common_day.available().map(|c| c.value.as_str()),
            most_common_hour: t.most_common_hour.available().map(|c| c.value),
            most_common_start_station: s.most_common_start.available().map(|c| c.value.as_str()),
            most_common_end_station: s.most_common_end.available().map(|c| c.value.as_str()),
            total_hours: d.total_hours.available().copied(),
            mean_minutes: d.mean_minutes.available().copied(),
            earliest_birth_year: u.earliest_birth_year.available().copied(),
            most_recent_birth_year: u.most_recent_birth_year.available().copied(),
        }
    }
}

/// Appends a summary of `report` as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_summary(path: &Path, report: &TripReport) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV summary");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(SummaryRow::from(report))?;
    writer.flush()?;

    Ok(())
}
