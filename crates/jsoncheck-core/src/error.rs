//! Error types for the check.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

use crate::query::QueryError;
use crate::types::Status;

/// Result type alias for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Hard failures that stop a check run at the point they occur.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("expression is required")]
    MissingExpression,

    #[error("query is required")]
    MissingQuery,

    #[error("url is required")]
    MissingUrl,

    #[error("failed to fetch URL: {0}")]
    Fetch(String),

    #[error("failed to read response body: {0}")]
    ReadBody(String),

    #[error("failed to unmarshal JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to parse jq query: {0}")]
    Compile(#[source] QueryError),

    #[error("failed to evaluate jq query: {0}")]
    Evaluate(#[source] QueryError),

    #[error("failed to parse extracted value {value:?}: {source}")]
    Extract {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("no valid value extracted")]
    NoValue,
}

impl CheckError {
    /// Severity this error is reported with.
    pub fn status(&self) -> Status {
        match self {
            CheckError::MissingExpression | CheckError::MissingQuery | CheckError::MissingUrl => {
                Status::Warning
            }
            _ => Status::Critical,
        }
    }
}

/// Errors loading a TOML config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
