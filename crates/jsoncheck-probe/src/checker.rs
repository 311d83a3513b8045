//! HTTP fetch and check orchestration.

use std::error::Error as StdError;

use tracing::{debug, info};

use jsoncheck_core::{evaluate_body, CheckConfig, CheckError, CheckResult, Outcome, QueryEngine};

const USER_AGENT: &str = concat!("jsoncheck/", env!("CARGO_PKG_VERSION"));

/// Runs checks with a fixed query engine.
#[derive(Debug, Clone)]
pub struct Checker<E> {
    engine: E,
}

impl<E: QueryEngine> Checker<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Execute one fetch-parse-query-compare cycle.
    ///
    /// Hard failures come back as `Err` and carry their own severity via
    /// [`CheckError::status`]; threshold verdicts come back as `Ok`.
    pub async fn run(&self, config: &CheckConfig) -> CheckResult<Outcome> {
        config.validate()?;

        let body = fetch(config).await?;
        let outcome = evaluate_body(config, &self.engine, &body)?;

        info!(status = %outcome.status, url = %config.url, "check finished");
        Ok(outcome)
    }
}

/// GET `config.url` and return the whole response body.
///
/// The response status code is not inspected; a JSON error page is
/// evaluated like any other body.
pub async fn fetch(config: &CheckConfig) -> CheckResult<Vec<u8>> {
    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(config.insecure_skip_verify);
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    let client = builder
        .build()
        .map_err(|e| CheckError::Fetch(error_chain(&e)))?;

    let resp = client.get(&config.url).send().await.map_err(|e| {
        debug!(error = %e, url = %config.url, "request failed");
        CheckError::Fetch(error_chain(&e))
    })?;
    debug!(status = %resp.status(), url = %config.url, "response received");

    let body = resp
        .bytes()
        .await
        .map_err(|e| CheckError::ReadBody(error_chain(&e)))?;
    debug!(bytes = body.len(), "response body read");

    Ok(body.to_vec())
}

/// Render an error with its sources, `outer: inner: root`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
