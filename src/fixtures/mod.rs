//! Fixtures

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::{customers::CustomerRecord, fixtures::customers::CustomersFixture};

pub mod customers;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,

        /// Underlying IO error
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML in {}: {source}", .path.display())]
    Yaml {
        /// File that could not be parsed
        path: PathBuf,

        /// Underlying YAML error
        source: serde_norway::Error,
    },
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Base path fixtures are loaded from
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load the customer named `name` from `customers/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn customer(&self, name: &str) -> Result<CustomerRecord, FixtureError> {
        let file_path = self.base_path.join("customers").join(format!("{name}.yml"));

        Self::customer_from_path(file_path)
    }

    /// Load a customer from an arbitrary YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn customer_from_path(path: impl AsRef<Path>) -> Result<CustomerRecord, FixtureError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let fixture: CustomersFixture =
            serde_norway::from_str(&contents).map_err(|source| FixtureError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), name = %fixture.customer.name, "loaded customer fixture");

        Ok(fixture.customer.into())
    }
}
