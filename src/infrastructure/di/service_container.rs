//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::FixtureService;
use crate::config::Settings;
use crate::domain::Shop;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Shop fixture loading
    pub fixtures: FixtureService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let fixtures = FixtureService::new(Arc::clone(&fs));

        Self {
            settings,
            fs,
            fixtures,
        }
    }

    /// Load the configured shop fixture, or the sample shop if none is set.
    pub fn shop(&self) -> InfraResult<Shop> {
        Ok(self
            .fixtures
            .load_or_sample(self.settings.fixture.as_deref())?)
    }
}
