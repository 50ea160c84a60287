//! Motel prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    app::{App, AppError},
    customers::{CustomerError, CustomerRecord, MailingAddress},
    dates::DateField,
    fixtures::{Fixture, FixtureError},
    output::{ConsoleSink, DescriptionSink, NoticeSink, OutputError, Outputs},
};
