//! Reducing a query result stream to a single number.

use serde_json::Value;
use tracing::trace;

use crate::error::{CheckError, CheckResult};
use crate::query::QueryResult;

/// String form of a query output.
///
/// Strings render bare (no quotes); everything else renders as compact
/// JSON, so `null` renders as `null` and numbers keep their JSON spelling.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Walk the result stream and return the last non-null element as `f64`.
///
/// Elements rendering as `null` are skipped. The first element that fails
/// to evaluate or to parse as a float aborts the walk; later elements are
/// never pulled.
pub fn extract_value<I>(results: I) -> CheckResult<f64>
where
    I: IntoIterator<Item = QueryResult<Value>>,
{
    let mut extracted = None;

    for result in results {
        let value = result.map_err(CheckError::Evaluate)?;
        let rendered = render_value(&value);
        if rendered == "null" {
            trace!("skipping null query output");
            continue;
        }

        let number = rendered
            .trim()
            .parse::<f64>()
            .map_err(|source| CheckError::Extract {
                value: rendered.clone(),
                source,
            })?;
        trace!(value = number, "query output");
        extracted = Some(number);
    }

    extracted.ok_or(CheckError::NoValue)
}
