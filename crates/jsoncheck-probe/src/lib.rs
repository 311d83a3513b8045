//! jsoncheck-probe — runs one HTTP JSON check end to end.
//!
//! # Architecture
//!
//! ```text
//! Checker::run(config)
//!   ├── CheckConfig::validate()      → WARNING if expression/query/url missing
//!   ├── fetch()                      → response body (CRITICAL on network error)
//!   └── jsoncheck_core::evaluate_body()
//!         ├── parse_document()
//!         ├── QueryEngine::compile() / Query::run()
//!         ├── extract_value()
//!         └── comparison::evaluate()
//! ```
//!
//! There are no retries: every failure ends the run with its status.

pub mod checker;

pub use checker::{fetch, Checker};
