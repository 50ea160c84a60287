//! Notice Sink
//!
//! Terminal stand-in for a modal alert: the description is framed in a
//! titled box so it stands apart from log output.

use std::io::Write;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Rows},
};

use crate::output::{DescriptionSink, OutputError};

const TITLE: &str = "Notice";

/// Writes each description inside a framed notice box.
#[derive(Debug)]
pub struct NoticeSink<W> {
    out: W,
}

impl<W: Write> NoticeSink<W> {
    /// Notice sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn render(description: &str) -> String {
    let mut builder = Builder::default();

    builder.push_record([TITLE]);
    builder.push_record([description]);

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Rows::first(), Alignment::center());

    table.to_string()
}

impl<W: Write> DescriptionSink for NoticeSink<W> {
    fn name(&self) -> &'static str {
        "notice"
    }

    fn deliver(&mut self, description: &str) -> Result<(), OutputError> {
        let notice = render(description);

        writeln!(self.out, "{notice}")
            .and_then(|()| self.out.flush())
            .map_err(|source| OutputError::Io {
                sink: self.name(),
                source,
            })
    }
}
