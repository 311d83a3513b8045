//! Command-line and environment binding.
//!
//! Precedence: flag or environment variable, then `--config` file, then
//! built-in defaults. Boolean environment variables accept `1`/`0`,
//! `t`/`f`, `yes`/`no`, `on`/`off` as well as `true`/`false`.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use jsoncheck_core::{CheckConfig, ConfigError};

#[derive(Parser, Debug)]
#[command(
    name = "check-http-json",
    about = "HTTP JSON check — extract a value with a jq query and compare it against a threshold",
    version
)]
pub struct Cli {
    /// Enable debug mode
    #[arg(
        short,
        long,
        env = "SENSU_CHECK_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,

    /// Expression for comparing result of query (`>N` or `<N`)
    #[arg(short, long, env = "SENSU_CHECK_EXPRESSION", allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Skip TLS certificate verification (not recommended!)
    #[arg(
        short,
        long,
        env = "SENSU_CHECK_INSECURE_SKIP_VERIFY",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub insecure_skip_verify: bool,

    /// Query for extracting value from JSON
    #[arg(short, long, env = "SENSU_CHECK_QUERY")]
    pub query: Option<String>,

    /// Request timeout in seconds, 0 to disable [default: 15]
    #[arg(short = 'T', long, env = "SENSU_CHECK_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// URL to test [default: http://localhost:80/]
    #[arg(short, long, env = "SENSU_CHECK_URL")]
    pub url: Option<String>,

    /// TOML file with any of the settings above
    #[arg(short, long, env = "SENSU_CHECK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over the config file (if any) over defaults.
    pub fn into_config(self) -> Result<CheckConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CheckConfig::from_file(path)?,
            None => CheckConfig::default(),
        };

        if let Some(url) = self.url {
            config.url = url;
        }
        if let Some(query) = self.query {
            config.query = query;
        }
        if let Some(expression) = self.expression {
            config.expression = expression;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        config.insecure_skip_verify |= self.insecure_skip_verify;
        config.debug |= self.debug;

        Ok(config)
    }
}
