//! jsoncheck-core — the evaluation half of the HTTP JSON check.
//!
//! Everything after the HTTP fetch lives here: decoding the response
//! body, running the configured query, reducing the query output to a
//! single number, and comparing that number against the threshold
//! expression.
//!
//! # Flow
//!
//! ```text
//! body ──parse_document──▶ Value
//!      ──QueryEngine::compile / Query::run──▶ lazy result stream
//!      ──extract_value──▶ f64 (last non-null element)
//!      ──comparison::evaluate──▶ Outcome { status, message }
//! ```
//!
//! Failures come back in two shapes. Hard errors (bad config, undecodable
//! body, broken query, unparseable element) are `Err(CheckError)` and
//! carry their own severity via [`CheckError::status`]. Threshold
//! verdicts, including a malformed threshold literal, are `Ok(Outcome)`
//! with a message and no error attached.

pub mod comparison;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod query;
pub mod types;

pub use comparison::Comparison;
pub use config::CheckConfig;
pub use error::{CheckError, CheckResult, ConfigError};
pub use evaluate::{evaluate_body, evaluate_document, parse_document};
pub use extract::{extract_value, render_value};
pub use query::{Query, QueryEngine, QueryError, QueryResult};
pub use types::{Outcome, Status};
