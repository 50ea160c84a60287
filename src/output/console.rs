//! Console Sink

use std::io::Write;

use crate::output::{DescriptionSink, OutputError};

/// Writes each description on its own line.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Console sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DescriptionSink for ConsoleSink<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn deliver(&mut self, description: &str) -> Result<(), OutputError> {
        writeln!(self.out, "{description}")
            .and_then(|()| self.out.flush())
            .map_err(|source| OutputError::Io {
                sink: self.name(),
                source,
            })
    }
}
