//! Motel CLI

use std::{io, process::ExitCode};

use tracing::error;

use motel::{app::App, config::Config, fixtures::Fixture, observability};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    let app = App::new(Fixture::with_base_path(&config.fixtures));

    match app.run(config.into_command(), io::stdout(), io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");

            #[expect(clippy::print_stderr, reason = "final error report for the user")]
            {
                eprintln!("{error}");
            }

            ExitCode::FAILURE
        }
    }
}
