//! The synchronous part of a check: body → document → value → outcome.

use serde_json::{Map, Value};
use tracing::debug;

use crate::comparison;
use crate::config::CheckConfig;
use crate::error::{CheckError, CheckResult};
use crate::extract::extract_value;
use crate::query::QueryEngine;
use crate::types::Outcome;

/// Decode a response body. Only a top-level JSON object is accepted.
pub fn parse_document(body: &[u8]) -> CheckResult<Value> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    Ok(Value::Object(object))
}

/// Compile the configured query, extract a value from `document`, and
/// compare it against the configured expression.
pub fn evaluate_document(
    config: &CheckConfig,
    engine: &dyn QueryEngine,
    document: Value,
) -> CheckResult<Outcome> {
    let query = engine.compile(&config.query).map_err(CheckError::Compile)?;
    let value = extract_value(query.run(document))?;
    debug!(query = %config.query, value, "value extracted");

    Ok(comparison::evaluate(&config.query, &config.expression, value))
}

/// [`parse_document`] followed by [`evaluate_document`].
pub fn evaluate_body(
    config: &CheckConfig,
    engine: &dyn QueryEngine,
    body: &[u8],
) -> CheckResult<Outcome> {
    let document = parse_document(body)?;
    if config.debug {
        debug!(%document, "parsed JSON data");
    }
    evaluate_document(config, engine, document)
}
