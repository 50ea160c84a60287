//! Application
//!
//! Resolves the customer and the current day for a command, then hands the
//! result to the configured sinks.

use std::io::Write;

use jiff::{Zoned, civil::Date};
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{Command, CustomerArgs, DescribeArgs},
    customers::{CustomerError, CustomerRecord},
    fixtures::{Fixture, FixtureError},
    output::{ConsoleSink, NoticeSink, OutputError, Outputs},
};

/// Errors running a command.
#[derive(Debug, Error)]
pub enum AppError {
    /// Customer fixture could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// A derived value requested on its own could not be computed.
    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// Output could not be written.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Command runner.
#[derive(Debug, Clone, Default)]
pub struct App {
    fixture: Fixture,
}

impl App {
    /// Create a runner loading named customers from `fixture`.
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }

    /// Resolve the customer a command refers to.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if a named or file fixture cannot be loaded.
    pub fn customer(&self, args: &CustomerArgs) -> Result<CustomerRecord, FixtureError> {
        match (&args.customer, &args.file) {
            (Some(name), _) => self.fixture.customer(name),
            (None, Some(path)) => Fixture::customer_from_path(path),
            (None, None) => Ok(CustomerRecord::sample()),
        }
    }

    /// Run `command`, writing results to `out` and notices to `err`.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if the customer cannot be loaded, a requested
    /// derived value cannot be computed, or output fails.
    pub fn run<O, E>(&self, command: Command, out: O, err: E) -> Result<(), AppError>
    where
        O: Write + 'static,
        E: Write + 'static,
    {
        match command {
            Command::Describe(args) => self.describe(&args, out, err),
            Command::Age(args) => {
                let customer = self.customer(&args.customer)?;
                let age = customer.age(resolve_today(args.today))?;

                Outputs::new()
                    .with_sink(ConsoleSink::new(out))
                    .deliver(&age.to_string())
                    .map_err(Into::into)
            }
            Command::Stay(args) => {
                let customer = self.customer(&args)?;
                let days = customer.stay_duration()?;

                Outputs::new()
                    .with_sink(ConsoleSink::new(out))
                    .deliver(&days.to_string())
                    .map_err(Into::into)
            }
        }
    }

    fn describe<O, E>(&self, args: &DescribeArgs, out: O, err: E) -> Result<(), AppError>
    where
        O: Write + 'static,
        E: Write + 'static,
    {
        let customer = self.customer(&args.customer)?;
        let description = customer.describe(resolve_today(args.today));

        let mut outputs = Outputs::new().with_sink(ConsoleSink::new(out));

        if !args.no_notice {
            outputs = outputs.with_sink(NoticeSink::new(err));
        }

        debug!(sinks = ?outputs, "delivering description");

        outputs.deliver(&description)?;

        Ok(())
    }
}

fn resolve_today(today: Option<Date>) -> Date {
    let today = today.unwrap_or_else(|| Zoned::now().date());

    debug!(%today, "resolved current day");

    today
}
