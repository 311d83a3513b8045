//! Query-engine seam.
//!
//! The check never talks to a concrete query language directly. An engine
//! compiles the configured expression once, and the compiled query turns a
//! document into a lazy stream of values. Tests plug in fixed streams.

use serde_json::Value;
use thiserror::Error;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The expression could not be parsed or references undefined names.
    #[error("{0}")]
    Compile(String),

    /// Evaluation produced an error value instead of an output.
    #[error("{0}")]
    Runtime(String),
}

/// Compiles query expressions.
pub trait QueryEngine: Send + Sync {
    fn compile(&self, expression: &str) -> QueryResult<Box<dyn Query>>;
}

/// A compiled query.
pub trait Query {
    /// Run against `document`, yielding outputs lazily in evaluation order.
    fn run<'a>(&'a self, document: Value) -> Box<dyn Iterator<Item = QueryResult<Value>> + 'a>;
}
