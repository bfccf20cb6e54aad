//! Trip records, the raw column table they are parsed from, and filtering

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

use crate::domain::{month_name, weekday_name, DayFilter, DomainError, MonthFilter, MONTHS};

/// Source column names.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    pub const REQUIRED: [&str; 6] = [
        START_TIME,
        END_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];
}

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// One named column of nullable text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    pub name: String,
    pub cells: Vec<Option<String>>,
}

/// Untyped, column-oriented view of a trip data file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    columns: Vec<RawColumn>,
}

impl RawTable {
    /// Column names are trimmed; all columns must have the same length.
    pub fn new(columns: Vec<RawColumn>) -> Self {
        let columns: Vec<RawColumn> = columns
            .into_iter()
            .map(|c| RawColumn {
                name: c.name.trim().to_string(),
                cells: c.cells,
            })
            .collect();
        debug_assert!(columns.windows(2).all(|w| w[0].cells.len() == w[1].cells.len()));
        Self { columns }
    }

    /// Build from header and row slices; empty cells become nulls.
    pub fn from_rows(headers: &[&str], rows: &[Vec<&str>]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, name)| RawColumn {
                name: name.to_string(),
                cells: rows
                    .iter()
                    .map(|row| {
                        row.get(i)
                            .filter(|cell| !cell.trim().is_empty())
                            .map(|cell| cell.to_string())
                    })
                    .collect(),
            })
            .collect();
        Self::new(columns)
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn column(&self, name: &str) -> Option<&RawColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn require(&self, name: &str) -> Result<&RawColumn, DomainError> {
        self.column(name)
            .ok_or_else(|| DomainError::MissingColumn(name.to_string()))
    }
}

/// Which optional columns the source carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripSchema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// One bicycle rental.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Seconds.
    pub trip_duration: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: Month,
    pub day_of_week: Weekday,
}

impl TripRecord {
    /// Start hour 0-23, derived on demand.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }
}

/// Ordered trip records of one city.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    schema: TripSchema,
    records: Vec<TripRecord>,
}

impl TripTable {
    /// Parse a raw table into typed records, deriving month and weekday.
    ///
    /// Fails on the first missing required column or unparseable cell;
    /// row numbers in errors are 1-based data rows.
    pub fn from_raw(raw: &RawTable) -> Result<Self, DomainError> {
        let start = raw.require(columns::START_TIME)?;
        let end = raw.require(columns::END_TIME)?;
        let duration = raw.require(columns::TRIP_DURATION)?;
        let start_station = raw.require(columns::START_STATION)?;
        let end_station = raw.require(columns::END_STATION)?;
        let user_type = raw.require(columns::USER_TYPE)?;
        let gender = raw.column(columns::GENDER);
        let birth_year = raw.column(columns::BIRTH_YEAR);

        let schema = TripSchema {
            has_gender: gender.is_some(),
            has_birth_year: birth_year.is_some(),
        };

        let mut records = Vec::with_capacity(raw.height());
        for i in 0..raw.height() {
            let row = i + 1;
            let start_time = parse_timestamp(start.cells[i].as_deref()).ok_or_else(|| {
                DomainError::InvalidTimestamp {
                    row,
                    value: start.cells[i].clone().unwrap_or_default(),
                }
            })?;
            let trip_duration = parse_number(duration.cells[i].as_deref()).ok_or_else(|| {
                DomainError::InvalidDuration {
                    row,
                    value: duration.cells[i].clone().unwrap_or_default(),
                }
            })?;
            let birth_year = match birth_year.and_then(|c| c.cells[i].as_deref()) {
                None => None,
                Some(text) => Some(parse_year(text).ok_or_else(|| {
                    DomainError::InvalidBirthYear {
                        row,
                        value: text.to_string(),
                    }
                })?),
            };

            records.push(TripRecord {
                month: MONTHS[start_time.month0() as usize],
                day_of_week: start_time.weekday(),
                start_time,
                end_time: end.cells[i].clone(),
                trip_duration,
                start_station: start_station.cells[i].clone(),
                end_station: end_station.cells[i].clone(),
                user_type: user_type.cells[i].clone(),
                gender: gender.and_then(|c| c.cells[i].clone()),
                birth_year,
            });
        }

        Ok(Self { schema, records })
    }

    /// New table holding only the records that match both filters, in order.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        let records = self
            .records
            .iter()
            .filter(|r| month.matches(r.month) && day.matches(r.day_of_week))
            .cloned()
            .collect();
        TripTable {
            schema: self.schema,
            records,
        }
    }

    pub fn schema(&self) -> TripSchema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a start timestamp, accepting the layouts the city exports use.
pub fn parse_timestamp(text: Option<&str>) -> Option<NaiveDateTime> {
    let text = text?.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

fn parse_number(text: Option<&str>) -> Option<f64> {
    text?.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whole year from text like `1989` or `1989.0`; `None` outside the `i32` range.
fn parse_year(text: &str) -> Option<i32> {
    let year = parse_number(Some(text))?.trunc();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&year)
        .then_some(year as i32)
}
