//! Synchronous client for the RetroAchievements Web API.
//!
//! # Overview
//! `RaClient` exposes every read-only endpoint of
//! `https://retroachievements.org/API/` as a method returning the decoded
//! JSON response. Arguments with a closed set of legal values are checked
//! locally and rejected with `Error::InvalidArgument` before any request is
//! sent.
//!
//! # Design
//! - `RaClient` is immutable: it holds a `ClientConfig` (API key, base URL,
//!   timeout, user agent) and a `Transport`.
//! - Every endpoint funnels through `RaClient::dispatch`, which injects the
//!   API key as `y`, performs one blocking GET and parses the body.
//! - Dispatch is split into `build_request` / `Transport::execute` /
//!   `parse_response` so the I/O boundary is explicit and replaceable.
//! - Responses are untyped `serde_json::Value`; their shape belongs to the
//!   server.
//! - Endpoints with better-suited alternatives log a `tracing` warning under
//!   the `retroachievements::advisory` target and still run.
//!
//! ```no_run
//! use retroachievements_core::RaClient;
//!
//! let client = RaClient::new("my-web-api-key");
//! let game = client.get_game(14402)?;
//! println!("{}", game["Title"]);
//! # Ok::<(), retroachievements_core::Error>(())
//! ```

pub mod advisory;
pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod http;
pub mod params;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

pub use advisory::Advisory;
pub use client::RaClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use params::{ParamValue, Params};
pub use types::IdList;
pub use validate::is_valid_identifier_list;
