//! Application services

pub mod loader;
pub mod pager;
pub mod statistics;

pub use loader::DatasetLoader;
pub use pager::{Page, RawDataPager, PAGE_SIZE};
pub use statistics::{
    duration_stats, station_stats, time_stats, user_stats, BirthYearStats, DurationStats,
    StationStats, TimeStats, Timed, UserStats,
};
