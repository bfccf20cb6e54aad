//! Explore US bikeshare trip data.
//!
//! Layers, innermost first:
//! - [`domain`]: filters, trip records and tables, frequency counting
//! - [`application`]: dataset loading, statistics, raw data paging
//! - [`infrastructure`]: CSV and terminal adapters, service wiring
//! - [`cli`]: argument parsing, prompting, rendering, the session loop

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
