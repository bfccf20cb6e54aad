//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DatasetLoader;
use crate::config::Settings;
use crate::infrastructure::traits::{PolarsTripSource, TripSource};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Loads filtered trip tables
    pub loader: DatasetLoader,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(PolarsTripSource))
    }

    /// Create a service container with a custom trip source.
    pub fn with_deps(settings: Settings, source: Arc<dyn TripSource>) -> Self {
        let loader = DatasetLoader::new(Arc::new(settings), source);
        Self { loader }
    }
}
