//! Check configuration and TOML config-file parsing.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, CheckResult, ConfigError};

pub const DEFAULT_URL: &str = "http://localhost:80/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Resolved settings for one check run.
///
/// Every field may be omitted in a config file; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// URL to fetch.
    pub url: String,
    /// jq query selecting the value from the response document.
    pub query: String,
    /// Threshold expression: `>N`, `<N`, or empty.
    pub expression: String,
    /// Request timeout in seconds. Zero disables the timeout.
    pub timeout: u64,
    /// Skip TLS certificate verification.
    pub insecure_skip_verify: bool,
    /// Log the decoded response document.
    pub debug: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            query: String::new(),
            expression: String::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            insecure_skip_verify: false,
            debug: false,
        }
    }
}

impl CheckConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Refuse to run unless expression, query and url are all set.
    ///
    /// Fields are checked in that order and the first missing one is reported.
    pub fn validate(&self) -> CheckResult<()> {
        if self.expression.is_empty() {
            return Err(CheckError::MissingExpression);
        }
        if self.query.is_empty() {
            return Err(CheckError::MissingQuery);
        }
        if self.url.is_empty() {
            return Err(CheckError::MissingUrl);
        }
        Ok(())
    }

    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn valid_config() -> CheckConfig {
        CheckConfig {
            query: ".status.load".to_string(),
            expression: "<5".to_string(),
            ..CheckConfig::default()
        }
    }

    #[test]
    fn defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.url, "http://localhost:80/");
        assert_eq!(config.timeout, 15);
        assert!(!config.insecure_skip_verify);
        assert!(!config.debug);
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_requires_expression_first() {
        let config = CheckConfig {
            expression: String::new(),
            query: String::new(),
            ..valid_config()
        };
        assert!(matches!(config.validate(), Err(CheckError::MissingExpression)));
    }

    #[test]
    fn validate_requires_query() {
        let config = CheckConfig {
            query: String::new(),
            ..valid_config()
        };
        assert!(matches!(config.validate(), Err(CheckError::MissingQuery)));
    }

    #[test]
    fn validate_requires_url() {
        let config = CheckConfig {
            url: String::new(),
            ..valid_config()
        };
        assert!(matches!(config.validate(), Err(CheckError::MissingUrl)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = CheckConfig {
            timeout: 0,
            ..CheckConfig::default()
        };
        assert_eq!(config.request_timeout(), None);
        assert_eq!(
            CheckConfig::default().request_timeout(),
            Some(Duration::from_secs(15))
        );
    }

    #[test]
    fn parse_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
url = "https://example.com/stats"
query = ".queue.depth"
insecure_skip_verify = true
"#
        )
        .unwrap();

        let config = CheckConfig::from_file(file.path()).unwrap();
        assert_eq!(config.url, "https://example.com/stats");
        assert_eq!(config.query, ".queue.depth");
        assert!(config.insecure_skip_verify);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.expression, "");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = CheckConfig::from_file(Path::new("/nonexistent/jsoncheck.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout = \"soon\"").unwrap();
        let err = CheckConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
