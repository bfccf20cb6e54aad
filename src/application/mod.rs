//! Application layer: load, summarize and page trip tables
//!
//! Reads trip data only through [`TripSource`](crate::infrastructure::traits::TripSource).

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
