//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Which customer record to work with.
#[derive(Debug, Default, Args)]
pub struct CustomerArgs {
    /// Customer fixture name, loaded from `<fixtures>/customers/<name>.yml`
    #[arg(long, conflicts_with = "file")]
    pub customer: Option<String>,

    /// Path to a customer YAML file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `describe`.
#[derive(Debug, Default, Args)]
pub struct DescribeArgs {
    /// Customer selection; the built-in sample when omitted
    #[command(flatten)]
    pub customer: CustomerArgs,

    /// Date to compute the age on; the local date when omitted
    #[arg(long)]
    pub today: Option<Date>,

    /// Skip the framed notice on standard error
    #[arg(long)]
    pub no_notice: bool,
}

/// Arguments for `age`.
#[derive(Debug, Args)]
pub struct AgeArgs {
    /// Customer selection; the built-in sample when omitted
    #[command(flatten)]
    pub customer: CustomerArgs,

    /// Date to compute the age on; the local date when omitted
    #[arg(long)]
    pub today: Option<Date>,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the full customer description
    Describe(DescribeArgs),

    /// Print the customer's age
    Age(AgeArgs),

    /// Print the length of the customer's stay in days
    Stay(CustomerArgs),
}

/// Motel CLI configuration
#[derive(Debug, Parser)]
#[command(name = "motel", about = "Motel customer descriptions", long_about = None)]
pub struct Config {
    /// Directory customer fixtures are loaded from
    #[arg(long, env = "MOTEL_FIXTURES", default_value = "./fixtures", global = true)]
    pub fixtures: PathBuf,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Subcommand; `describe` with the sample customer when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// The subcommand to run, defaulting to `describe`.
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Describe(DescribeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Config::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_describe_sample() -> TestResult {
        let config = Config::try_parse_from(["motel"])?;

        assert_eq!(config.fixtures, PathBuf::from("./fixtures"));

        match config.into_command() {
            Command::Describe(args) => {
                assert!(args.customer.customer.is_none(), "no fixture expected");
                assert!(args.customer.file.is_none(), "no file expected");
                assert!(args.today.is_none(), "no fixed day expected");
                assert!(!args.no_notice, "notice should be on by default");
            }
            other => panic!("expected describe, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn describe_parses_today_and_flags() -> TestResult {
        let config = Config::try_parse_from([
            "motel",
            "describe",
            "--customer",
            "george-clooney",
            "--today",
            "2024-07-20",
            "--no-notice",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.logging.log_format, LogFormat::Json);

        match config.into_command() {
            Command::Describe(args) => {
                assert_eq!(args.customer.customer.as_deref(), Some("george-clooney"));
                assert_eq!(args.today, Some(date(2024, 7, 20)));
                assert!(args.no_notice, "--no-notice should be set");
            }
            other => panic!("expected describe, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn invalid_today_is_rejected() {
        let result = Config::try_parse_from(["motel", "age", "--today", "yesterday"]);

        assert!(result.is_err(), "expected --today to be validated");
    }

    #[test]
    fn customer_and_file_conflict() {
        let result = Config::try_parse_from([
            "motel",
            "stay",
            "--customer",
            "george-clooney",
            "--file",
            "george.yml",
        ]);

        assert!(result.is_err(), "expected --customer and --file to conflict");
    }
}
