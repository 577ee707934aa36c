//! Shop fixture service
//!
//! Loads the read-only shop graph the collection queries run over, either
//! from a TOML file or from the built-in sample shop.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Customer, Shop};
use crate::infrastructure::traits::FileSystem;

/// Built-in sample shop (seven customers in five cities).
const SAMPLE_SHOP_TOML: &str = include_str!("../../../fixtures/sample_shop.toml");

/// Service for loading shop fixtures.
pub struct FixtureService {
    fs: Arc<dyn FileSystem>,
}

impl FixtureService {
    /// Create a new fixture service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load a shop from a TOML fixture file.
    pub fn load(&self, path: &Path) -> ApplicationResult<Shop> {
        debug!("load: path={}", path.display());
        if !self.fs.exists(path) {
            return Err(ApplicationError::FixtureNotFound(path.to_path_buf()));
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read shop fixture", path)?;
        let shop = Self::parse(&content, path)?;
        debug!(
            "load: shop '{}' with {} customers",
            shop.name,
            shop.customers.len()
        );
        Ok(shop)
    }

    /// Load from `path` when given, otherwise fall back to the sample shop.
    pub fn load_or_sample(&self, path: Option<&Path>) -> ApplicationResult<Shop> {
        match path {
            Some(p) => self.load(p),
            None => Self::sample(),
        }
    }

    /// The built-in sample shop.
    pub fn sample() -> ApplicationResult<Shop> {
        Self::parse(SAMPLE_SHOP_TOML, Path::new("<sample>"))
    }

    /// Parse fixture content; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> ApplicationResult<Shop> {
        toml::from_str(content).map_err(|e| ApplicationError::Fixture {
            path: PathBuf::from(origin),
            message: e.to_string(),
        })
    }

    /// Look up a customer by name, failing with `CustomerNotFound`.
    pub fn require_customer<'a>(shop: &'a Shop, name: &str) -> ApplicationResult<&'a Customer> {
        shop.customer(name)
            .ok_or_else(|| ApplicationError::CustomerNotFound(name.to_string()))
    }
}
