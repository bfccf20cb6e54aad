//! Dataset loading service
//!
//! Reads one city's trip file through a [`TripSource`], converts it into a
//! typed [`TripTable`] and applies the month/day filters.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{City, Filters, TripTable};
use crate::infrastructure::traits::TripSource;

/// Service for loading filtered trip tables.
pub struct DatasetLoader {
    settings: Arc<Settings>,
    source: Arc<dyn TripSource>,
}

impl DatasetLoader {
    pub fn new(settings: Arc<Settings>, source: Arc<dyn TripSource>) -> Self {
        Self { settings, source }
    }

    /// Load every trip of a city, in source order.
    #[instrument(skip(self))]
    pub fn load_city(&self, city: City) -> ApplicationResult<TripTable> {
        let path = self.settings.city_path(city);
        debug!("load_city: path={}", path.display());

        let raw = self.source.read_table(&path)?;
        debug!("load_city: {} raw rows", raw.height());

        TripTable::from_raw(&raw).map_err(|source| ApplicationError::Data { path, source })
    }

    /// Load a city and keep only the trips matching the month and day filters.
    #[instrument(skip(self, filters), fields(filters = %filters))]
    pub fn load(&self, filters: &Filters) -> ApplicationResult<TripTable> {
        let table = self.load_city(filters.city)?;
        let filtered = table.filter(filters.month, filters.day);
        debug!("load: {} of {} rows match", filtered.len(), table.len());
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use chrono::{Month, Weekday};

    use crate::domain::{columns, DayFilter, DomainError, MonthFilter, RawTable};

    struct StubSource {
        table: RawTable,
        requested: Mutex<Vec<PathBuf>>,
    }

    impl TripSource for StubSource {
        fn read_table(&self, path: &Path) -> ApplicationResult<RawTable> {
            self.requested.lock().unwrap().push(path.to_path_buf());
            Ok(self.table.clone())
        }
    }

    fn loader(rows: &[Vec<&str>]) -> (DatasetLoader, Arc<StubSource>) {
        let source = Arc::new(StubSource {
            table: RawTable::from_rows(&columns::REQUIRED, rows),
            requested: Mutex::new(Vec::new()),
        });
        let settings = Arc::new(Settings {
            data_dir: PathBuf::from("/data"),
            ..Settings::default()
        });
        (DatasetLoader::new(settings, source.clone()), source)
    }

    fn trip(start: &str) -> Vec<&str> {
        vec![start, "", "60", "A", "B", "Subscriber"]
    }

    #[test]
    fn given_city_when_loading_then_reads_configured_file() {
        let (loader, source) = loader(&[trip("2017-01-01 10:00:00")]);

        loader.load_city(City::NewYorkCity).unwrap();

        assert_eq!(
            source.requested.lock().unwrap().as_slice(),
            &[PathBuf::from("/data/new_york_city.csv")]
        );
    }

    #[test]
    fn given_month_and_day_filter_when_loading_then_only_matching_rows_remain() {
        let (loader, _) = loader(&[
            trip("2017-02-06 10:00:00"), // monday
            trip("2017-02-07 10:00:00"), // tuesday
            trip("2017-03-06 10:00:00"), // monday
            trip("2017-02-13 11:00:00"), // monday
        ]);
        let filters = Filters {
            city: City::Chicago,
            month: MonthFilter::Only(Month::February),
            day: DayFilter::Only(Weekday::Mon),
        };

        let table = loader.load(&filters).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table
            .iter()
            .all(|r| r.month == Month::February && r.day_of_week == Weekday::Mon));
        assert_eq!(table.records()[1].hour(), 11);
    }

    #[test]
    fn given_bad_timestamp_when_loading_then_whole_load_fails() {
        let (loader, _) = loader(&[trip("2017-02-06 10:00:00"), trip("garbage")]);
        let filters = Filters {
            city: City::Washington,
            month: MonthFilter::All,
            day: DayFilter::All,
        };

        let err = loader.load(&filters).unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Data {
                source: DomainError::InvalidTimestamp { row: 2, .. },
                ..
            }
        ));
    }
}
