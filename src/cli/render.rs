//! Render statistics and raw pages as terminal lines

use std::time::Duration;

use comfy_table::Table;

use crate::application::services::{
    DurationStats, Page, StationStats, TimeStats, Timed, UserStats,
};
use crate::cli::output;
use crate::domain::{columns, month_name, weekday_name, TripSchema};

pub const NO_DATA: &str = "No data available.";

fn or_no_data<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

fn section(title: &str, body: Vec<String>, elapsed: Duration) -> Vec<String> {
    let mut lines = vec![String::new(), output::header(title), String::new()];
    lines.extend(body);
    lines.push(String::new());
    lines.push(format!("This took {} seconds.", elapsed.as_secs_f64()));
    lines.push(output::separator());
    lines
}

fn counts(values: &[(String, usize)]) -> Vec<String> {
    if values.is_empty() {
        return vec![NO_DATA.to_string()];
    }
    values
        .iter()
        .map(|(value, n)| output::count(value, *n))
        .collect()
}

pub fn time_stats(stats: &Timed<TimeStats>) -> Vec<String> {
    let s = &stats.value;
    section(
        "Calculating The Most Frequent Times of Travel...",
        vec![
            output::field("Most Common Month", &or_no_data(s.most_common_month.map(month_name))),
            output::field("Most Common Day", &or_no_data(s.most_common_day.map(weekday_name))),
            output::field("Most Common Start Hour", &or_no_data(s.most_common_hour)),
        ],
        stats.elapsed,
    )
}

pub fn station_stats(stats: &Timed<StationStats>) -> Vec<String> {
    let s = &stats.value;
    let trip = s
        .most_common_trip
        .as_ref()
        .map(|(start, end)| format!("{} -> {}", start, end));
    section(
        "Calculating The Most Popular Stations and Trip...",
        vec![
            output::field(
                "Most commonly used start station",
                &or_no_data(s.most_common_start.as_deref()),
            ),
            output::field(
                "Most commonly used end station",
                &or_no_data(s.most_common_end.as_deref()),
            ),
            output::field("Most common trip", &or_no_data(trip)),
        ],
        stats.elapsed,
    )
}

pub fn duration_stats(stats: &Timed<DurationStats>) -> Vec<String> {
    let s = &stats.value;
    let mean = s
        .mean_minutes
        .map(|minutes| format!("{:.2} minutes", minutes));
    section(
        "Calculating Trip Duration...",
        vec![
            output::field("Total travel time", &format!("{:.2} days", s.total_days)),
            output::field("Mean travel time", &or_no_data(mean)),
        ],
        stats.elapsed,
    )
}

pub fn user_stats(stats: &Timed<UserStats>) -> Vec<String> {
    let s = &stats.value;
    let mut body = vec![output::field("User Types", "")];
    body.extend(counts(&s.user_types));

    body.push(String::new());
    body.push(output::field("Gender Types", ""));
    match &s.genders {
        Some(genders) => body.extend(counts(genders)),
        None => body.push(NO_DATA.to_string()),
    }

    body.push(String::new());
    match &s.birth_years {
        Some(years) => {
            body.push(output::field("Earliest Year", &years.earliest));
            body.push(output::field("Most Recent Year", &years.most_recent));
            body.push(output::field("Most Common Year", &years.most_common));
        }
        None => {
            body.push(output::field("Birth Year", ""));
            body.push(NO_DATA.to_string());
        }
    }

    section("Calculating User Stats...", body, stats.elapsed)
}

/// One page of raw rows as a table; row labels are positions in the filtered table.
pub fn page(page: &Page<'_>, schema: TripSchema) -> String {
    let mut header = vec![
        "",
        columns::START_TIME,
        columns::END_TIME,
        columns::TRIP_DURATION,
        columns::START_STATION,
        columns::END_STATION,
        columns::USER_TYPE,
    ];
    if schema.has_gender {
        header.push(columns::GENDER);
    }
    if schema.has_birth_year {
        header.push(columns::BIRTH_YEAR);
    }
    header.extend(["month", "day_of_week"]);

    let mut table = Table::new();
    table.set_header(header);

    for (offset, trip) in page.rows.iter().enumerate() {
        let text = |cell: &Option<String>| cell.clone().unwrap_or_default();
        let mut row = vec![
            (page.start + offset).to_string(),
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            text(&trip.end_time),
            trip.trip_duration.to_string(),
            text(&trip.start_station),
            text(&trip.end_station),
            text(&trip.user_type),
        ];
        if schema.has_gender {
            row.push(text(&trip.gender));
        }
        if schema.has_birth_year {
            row.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        row.push(trip.month_name().to_string());
        row.push(trip.day_name().to_string());
        table.add_row(row);
    }

    table.to_string()
}
