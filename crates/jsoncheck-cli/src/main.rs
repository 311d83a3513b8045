//! check-http-json — the monitoring check binary.
//!
//! Prints one line to stdout and exits with the plugin status code:
//! OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3. Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! check-http-json --url http://localhost:8080/stats --query '.queue.depth' --expression '<100'
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsoncheck_core::{CheckResult, Outcome, Status};
use jsoncheck_jq::JqEngine;
use jsoncheck_probe::Checker;

mod args;

use args::Cli;

const CHECK_NAME: &str = "check-http-json";

/// Targets raised to `debug` by `--debug`.
const LOG_TARGETS: [&str; 4] = [
    "check_http_json",
    "jsoncheck_core",
    "jsoncheck_jq",
    "jsoncheck_probe",
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => exit_code(Status::Unknown),
            };
        }
    };

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => {
            println!("Error executing {CHECK_NAME}: {err}");
            return exit_code(Status::Unknown);
        }
    };

    if let Err(e) = init_tracing(config.debug) {
        eprintln!("failed to initialize logging: {e:#}");
    }

    let result = Checker::new(JqEngine::new()).run(&config).await;
    exit_code(report(result))
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if debug {
        for target in LOG_TARGETS {
            filter = filter.add_directive(format!("{target}=debug").parse()?);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Print the check line and return the status to exit with.
fn report(result: CheckResult<Outcome>) -> Status {
    match result {
        Ok(outcome) => {
            println!("{outcome}");
            outcome.status
        }
        Err(err) => {
            println!("Error executing {CHECK_NAME}: {err}");
            err.status()
        }
    }
}

fn exit_code(status: Status) -> ExitCode {
    ExitCode::from(status.exit_code())
}

#[cfg(test)]
mod tests {
    use jsoncheck_core::CheckError;

    use super::*;

    #[test]
    fn report_uses_outcome_status() {
        assert_eq!(report(Ok(Outcome::ok(""))), Status::Ok);
        assert_eq!(report(Ok(Outcome::warning("unsupported"))), Status::Warning);
        assert_eq!(report(Ok(Outcome::critical("failed"))), Status::Critical);
    }

    #[test]
    fn report_uses_error_severity() {
        assert_eq!(report(Err(CheckError::MissingQuery)), Status::Warning);
        assert_eq!(report(Err(CheckError::NoValue)), Status::Critical);
    }

    #[test]
    fn debug_directives_parse() {
        for target in LOG_TARGETS {
            assert!(format!("{target}=debug")
                .parse::<tracing_subscriber::filter::Directive>()
                .is_ok());
        }
    }
}
