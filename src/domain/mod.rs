//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod frequency;
pub mod trip;

pub use entities::*;
pub use error::DomainError;
pub use frequency::FrequencyCounter;
pub use trip::{columns, RawColumn, RawTable, TripRecord, TripSchema, TripTable};
