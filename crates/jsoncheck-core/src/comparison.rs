//! Threshold expressions.
//!
//! The grammar is deliberately closed: an empty string, or `>` / `<`
//! followed by a float literal. Comparisons are strict. Anything else is
//! reported as unsupported rather than rejected as an error.

use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::Outcome;

/// A parsed threshold expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// Empty expression; a successful extraction is enough.
    Any,
    GreaterThan(f64),
    LessThan(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("{0}")]
    InvalidThreshold(#[from] ParseFloatError),

    #[error("unsupported expression")]
    Unsupported,
}

impl FromStr for Comparison {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Comparison::Any);
        }
        if let Some(rest) = s.strip_prefix('>') {
            return Ok(Comparison::GreaterThan(rest.trim().parse()?));
        }
        if let Some(rest) = s.strip_prefix('<') {
            return Ok(Comparison::LessThan(rest.trim().parse()?));
        }
        Err(ComparisonError::Unsupported)
    }
}

impl Comparison {
    /// Whether `value` satisfies this comparison.
    pub fn holds(&self, value: f64) -> bool {
        match *self {
            Comparison::Any => true,
            Comparison::GreaterThan(threshold) => value > threshold,
            Comparison::LessThan(threshold) => value < threshold,
        }
    }
}

/// Compare an extracted value against `expression` and produce the outcome.
///
/// `query` only appears in the messages.
pub fn evaluate(query: &str, expression: &str, value: f64) -> Outcome {
    let comparison = match expression.parse::<Comparison>() {
        Ok(comparison) => comparison,
        Err(ComparisonError::InvalidThreshold(e)) => {
            warn!(%expression, error = %e, "threshold is not a number");
            return Outcome::critical(format!("failed to parse expression value ({query}): {e}"));
        }
        Err(ComparisonError::Unsupported) => {
            warn!(%expression, "unsupported expression");
            return Outcome::warning(format!("unsupported expression ({query}) : {expression}"));
        }
    };

    match comparison {
        Comparison::Any => {
            debug!(value, "no expression configured");
            Outcome::ok("")
        }
        Comparison::GreaterThan(threshold) if !comparison.holds(value) => Outcome::critical(
            format!("expression check failed ({query}): {value:.2} <= {threshold:.2}"),
        ),
        Comparison::LessThan(threshold) if !comparison.holds(value) => Outcome::critical(
            format!("expression check failed ({query}): {value:.2} >= {threshold:.2}"),
        ),
        _ => Outcome::ok(format!(
            "expression check passed ({query}): {value:.2} {expression}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    #[test]
    fn parse_forms() {
        assert_eq!("".parse::<Comparison>(), Ok(Comparison::Any));
        assert_eq!(">5".parse::<Comparison>(), Ok(Comparison::GreaterThan(5.0)));
        assert_eq!("< 2.5 ".parse::<Comparison>(), Ok(Comparison::LessThan(2.5)));
        assert_eq!("=5".parse::<Comparison>(), Err(ComparisonError::Unsupported));
        assert_eq!(" >5".parse::<Comparison>(), Err(ComparisonError::Unsupported));
        assert!(matches!(
            ">abc".parse::<Comparison>(),
            Err(ComparisonError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn greater_than_is_strict() {
        assert_eq!(evaluate(".v", ">5", 6.0).status, Status::Ok);
        let outcome = evaluate(".v", ">5", 5.0);
        assert_eq!(outcome.status, Status::Critical);
        assert_eq!(outcome.message, "expression check failed (.v): 5.00 <= 5.00");
    }

    #[test]
    fn less_than_is_strict() {
        assert_eq!(evaluate(".v", "<5", 4.999).status, Status::Ok);
        let outcome = evaluate(".v", "<5", 5.0);
        assert_eq!(outcome.status, Status::Critical);
        assert_eq!(outcome.message, "expression check failed (.v): 5.00 >= 5.00");
    }

    #[test]
    fn passed_message_echoes_expression() {
        let outcome = evaluate(".load", "> 1", 3.14159);
        assert_eq!(outcome.status, Status::Ok);
        assert_eq!(outcome.message, "expression check passed (.load): 3.14 > 1");
    }

    #[test]
    fn unsupported_operators_warn() {
        for expression in ["=5", "==5", "!5", "5"] {
            for value in [0.0, 5.0, 100.0] {
                let outcome = evaluate(".v", expression, value);
                assert_eq!(outcome.status, Status::Warning, "{expression} with {value}");
            }
        }
        assert_eq!(evaluate(".v", "=5", 5.0).message, "unsupported expression (.v) : =5");
    }

    #[test]
    fn compound_operators_fail_threshold_parse() {
        // `>=5` is `>` followed by the literal `=5`.
        assert_eq!(evaluate(".v", ">=5", 6.0).status, Status::Critical);
        assert_eq!(evaluate(".v", "<=5", 4.0).status, Status::Critical);
    }

    #[test]
    fn bad_threshold_is_critical_message() {
        let outcome = evaluate(".v", ">five", 6.0);
        assert_eq!(outcome.status, Status::Critical);
        assert!(outcome.message.starts_with("failed to parse expression value (.v): "));
    }

    #[test]
    fn empty_expression_always_ok() {
        for value in [f64::MIN, -1.0, 0.0, 1e300] {
            assert_eq!(evaluate(".v", "", value).status, Status::Ok);
        }
    }

    #[test]
    fn nan_never_satisfies() {
        assert_eq!(evaluate(".v", ">0", f64::NAN).status, Status::Critical);
        assert_eq!(evaluate(".v", "<0", f64::NAN).status, Status::Critical);
    }
}
