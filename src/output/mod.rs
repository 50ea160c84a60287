//! Output
//!
//! Destinations a customer description is delivered to.

use std::{fmt, io};

use thiserror::Error;
use tracing::info;

pub mod console;
pub mod notice;

pub use console::ConsoleSink;
pub use notice::NoticeSink;

/// Errors delivering a description.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Writing to the sink failed.
    #[error("Failed to write to {sink}: {source}")]
    Io {
        /// Name of the sink that failed
        sink: &'static str,

        /// Underlying IO error
        source: io::Error,
    },
}

/// A destination for customer descriptions.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptionSink {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Deliver one description.
    ///
    /// # Errors
    ///
    /// Returns an [`OutputError`] if the description could not be written.
    fn deliver(&mut self, description: &str) -> Result<(), OutputError>;
}

/// Ordered set of sinks that all receive the same description.
#[derive(Default)]
pub struct Outputs {
    sinks: Vec<Box<dyn DescriptionSink>>,
}

impl fmt::Debug for Outputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.sinks.iter().map(|sink| sink.name()))
            .finish()
    }
}

impl Outputs {
    /// Create an empty set of outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sink; sinks are delivered to in the order they were added.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DescriptionSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Number of sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if there are no sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver `description` to every sink in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`OutputError`]; later sinks are not attempted.
    pub fn deliver(&mut self, description: &str) -> Result<(), OutputError> {
        self.sinks.iter_mut().try_for_each(|sink| {
            sink.deliver(description)?;

            info!(sink = sink.name(), "delivered description");

            Ok(())
        })
    }
}
