//! Infrastructure layer: CSV and terminal adapters, service wiring

pub mod di;
pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
