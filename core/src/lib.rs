//! Blocking client for the Codeforces public API.
//!
//! # Overview
//! Two layers. The transport layer turns a method name and named parameters
//! into a URL, performs one GET, and unwraps the `{"status", "result" |
//! "comment"}` envelope. The facade exposes one call per remote method,
//! validates arguments before anything is sent, and decodes the result into
//! typed records.
//!
//! # Design
//! - `CodeforcesClient` is stateless and does no I/O: `build_*` produces an
//!   `HttpRequest`, `parse` consumes an `HttpResponse`.
//! - `Transport` executes requests; `UreqTransport` is the default.
//! - `CodeforcesApi` combines the two and is what most callers want.
//! - The language is fixed per client and only selects the host.
//!
//! ```no_run
//! use codeforces_api::{CodeforcesApi, Language};
//!
//! let api = CodeforcesApi::with_language(Language::En)?;
//! for change in api.user_rating("tourist")? {
//!     println!("{}: {:+}", change.contest_name, change.delta());
//! }
//! # Ok::<(), codeforces_api::ApiError>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod params;
pub mod types;

pub use api::CodeforcesApi;
pub use client::{CodeforcesClient, StandingsOptions, MAX_HANDLES, MAX_RECENT_STATUS_COUNT};
pub use config::{ClientConfig, Language};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use params::{ParamValue, Params};
pub use types::*;
