//! Statistics engine
//!
//! Four independent, read-only routines over an already filtered
//! [`TripTable`]. Each result carries the wall-clock time it took to compute.

use std::time::{Duration, Instant};

use chrono::{Month, Weekday};
use tracing::{debug, instrument};

use crate::domain::{FrequencyCounter, TripTable};

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// A statistics result and how long it took to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

fn timed<T>(compute: impl FnOnce() -> T) -> Timed<T> {
    let started = Instant::now();
    let value = compute();
    Timed {
        value,
        elapsed: started.elapsed(),
    }
}

/// Most frequent times of travel; `None` when the table is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub most_common_month: Option<Month>,
    pub most_common_day: Option<Weekday>,
    pub most_common_hour: Option<u32>,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    pub most_common_trip: Option<(String, String)>,
}

/// Total and average trip duration.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_days: f64,
    /// `None` when there are no trips to average.
    pub mean_minutes: Option<f64>,
}

/// Birth year summary over the non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the city has no birth year column or no year is known.
    pub birth_years: Option<BirthYearStats>,
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[instrument(skip(table), fields(rows = table.len()))]
pub fn time_stats(table: &TripTable) -> Timed<TimeStats> {
    timed(|| {
        let months: FrequencyCounter<Month> = table.iter().map(|r| r.month).collect();
        let days: FrequencyCounter<Weekday> = table.iter().map(|r| r.day_of_week).collect();
        let hours: FrequencyCounter<u32> = table.iter().map(|r| r.hour()).collect();
        debug!("time_stats: {} distinct hours", hours.len());

        TimeStats {
            most_common_month: months.mode().copied(),
            most_common_day: days.mode().copied(),
            most_common_hour: hours.mode().copied(),
        }
    })
}

#[instrument(skip(table), fields(rows = table.len()))]
pub fn station_stats(table: &TripTable) -> Timed<StationStats> {
    timed(|| {
        let starts: FrequencyCounter<&str> =
            table.iter().filter_map(|r| r.start_station.as_deref()).collect();
        let ends: FrequencyCounter<&str> =
            table.iter().filter_map(|r| r.end_station.as_deref()).collect();
        let trips: FrequencyCounter<(&str, &str)> = table
            .iter()
            .filter_map(|r| Some((r.start_station.as_deref()?, r.end_station.as_deref()?)))
            .collect();
        debug!("station_stats: {} distinct trips", trips.len());

        StationStats {
            most_common_start: starts.mode().map(|s| s.to_string()),
            most_common_end: ends.mode().map(|s| s.to_string()),
            most_common_trip: trips
                .mode()
                .map(|(start, end)| (start.to_string(), end.to_string())),
        }
    })
}

#[instrument(skip(table), fields(rows = table.len()))]
pub fn duration_stats(table: &TripTable) -> Timed<DurationStats> {
    timed(|| {
        let total: f64 = table.iter().map(|r| r.trip_duration).sum();
        let mean_minutes = if table.is_empty() {
            None
        } else {
            Some(round2(total / table.len() as f64 / SECONDS_PER_MINUTE))
        };

        DurationStats {
            total_days: round2(total / SECONDS_PER_DAY),
            mean_minutes,
        }
    })
}

#[instrument(skip(table), fields(rows = table.len()))]
pub fn user_stats(table: &TripTable) -> Timed<UserStats> {
    timed(|| {
        let schema = table.schema();
        let user_types = count_text(table.iter().filter_map(|r| r.user_type.as_deref()));

        let genders = schema
            .has_gender
            .then(|| count_text(table.iter().filter_map(|r| r.gender.as_deref())));

        let birth_years = if schema.has_birth_year {
            birth_year_stats(table.iter().filter_map(|r| r.birth_year))
        } else {
            None
        };

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    })
}

fn count_text<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    values
        .collect::<FrequencyCounter<&str>>()
        .into_counts()
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

fn birth_year_stats(years: impl Iterator<Item = i32>) -> Option<BirthYearStats> {
    let counter: FrequencyCounter<i32> = years.collect();
    let most_common = *counter.mode()?;
    let counts = counter.into_counts();
    let earliest = counts.iter().map(|(year, _)| *year).min()?;
    let most_recent = counts.iter().map(|(year, _)| *year).max()?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
