//! jsoncheck-jq — jq queries for the check, evaluated with jaq.
//!
//! [`JqEngine`] compiles an expression against jaq's core natives plus the
//! jq standard library, so filters like `map`, `select` and `add` are
//! available. The compiled [`JqQuery`] yields its outputs lazily.

use jaq_interpret::{Ctx, FilterT, ParseCtx, RcIter, Val};
use serde_json::Value;
use tracing::debug;

use jsoncheck_core::{Query, QueryEngine, QueryError, QueryResult};

/// jq engine with the standard library loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct JqEngine;

impl JqEngine {
    pub fn new() -> Self {
        Self
    }
}

impl QueryEngine for JqEngine {
    fn compile(&self, expression: &str) -> QueryResult<Box<dyn Query>> {
        let mut defs = ParseCtx::new(Vec::new());
        defs.insert_natives(jaq_core::core());
        defs.insert_defs(jaq_std::std());

        let (main, errs) = jaq_parse::parse(expression, jaq_parse::main());
        if !errs.is_empty() {
            let reasons: Vec<String> = errs.iter().map(|e| format!("{e:?}")).collect();
            return Err(QueryError::Compile(reasons.join("; ")));
        }
        let main = main.ok_or_else(|| QueryError::Compile("empty query".to_string()))?;

        let filter = defs.compile(main);
        if !defs.errs.is_empty() {
            return Err(QueryError::Compile(format!(
                "{} undefined filter(s) or variable(s)",
                defs.errs.len()
            )));
        }

        debug!(%expression, "jq query compiled");
        Ok(Box::new(JqQuery {
            filter,
            inputs: RcIter::new(core::iter::empty()),
        }))
    }
}

/// A compiled jq filter.
pub struct JqQuery {
    filter: jaq_interpret::Filter,
    /// `input`/`inputs` see an empty stream; the check has one document.
    inputs: RcIter<core::iter::Empty<Result<Val, String>>>,
}

impl Query for JqQuery {
    fn run<'a>(&'a self, document: Value) -> Box<dyn Iterator<Item = QueryResult<Value>> + 'a> {
        let outputs = self
            .filter
            .run((Ctx::new([], &self.inputs), Val::from(document)));
        Box::new(outputs.map(|output| {
            output
                .map(to_json)
                .map_err(|e| QueryError::Runtime(e.to_string()))
        }))
    }
}

/// Convert a jq output to JSON.
///
/// JSON has no NaN or infinity, and the stock conversion turns them into
/// `null`. They are kept as their float spelling (`NaN`, `inf`, `-inf`)
/// so they still coerce to numbers instead of being skipped.
fn to_json(val: Val) -> Value {
    match val {
        Val::Float(f) if !f.is_finite() => Value::String(f.to_string()),
        other => Value::from(other),
    }
}
