//! HTTP transport for API calls.
//!
//! # Design
//! Requests and responses are plain data. `CodeforcesClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; a `Transport` performs the round-trip in between. `UreqTransport`
//! is the blocking implementation used by `CodeforcesApi` by default, and
//! tests substitute their own.

use std::fmt;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// A GET request for one remote method, described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Remote method name, e.g. `user.info`.
    pub method: String,
    /// Fully-qualified URL including the query string.
    pub url: String,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one `HttpRequest`. Implementations must not retry.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq::Agent`.
///
/// Non-2xx statuses are returned as data: the API reports failures as a JSON
/// envelope with HTTP 400, and that body still has to be read.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
    max_body_bytes: u64,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .new_agent();

        Self {
            agent,
            user_agent: config.user_agent.clone(),
            max_body_bytes: config.max_body_bytes,
        }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("user_agent", &self.user_agent)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut response = self
            .agent
            .get(&request.url)
            .call()?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body_bytes)
            .read_to_string()?;

        debug!(
            method = %request.method,
            status,
            bytes = body.len(),
            "received response"
        );

        Ok(HttpResponse { status, body })
    }
}
