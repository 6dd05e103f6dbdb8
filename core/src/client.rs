//! The client handle and the request dispatcher every endpoint goes through.
//!
//! # Design
//! `RaClient` holds an immutable `ClientConfig` and a `Transport`. A call is
//! split into `build_request` (authentication and URL assembly),
//! `Transport::execute` (the only I/O), and `parse_response` (status check
//! and JSON decoding). `dispatch` chains the three; endpoint wrappers in
//! `crate::endpoints` only validate their arguments and call `dispatch`.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::params::Params;

/// Query key carrying the API key.
pub const AUTH_PARAM: &str = "y";

/// Synchronous client for the RetroAchievements Web API.
#[derive(Debug, Clone)]
pub struct RaClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl RaClient<UreqTransport> {
    /// Client against the public API with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    /// Client configured from the environment; see `ClientConfig::from_env`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(ClientConfig::from_env()?))
    }
}

impl<T: Transport> RaClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Describe the GET for `endpoint` without sending it.
    ///
    /// The client's API key is written last, so it replaces any `y` the
    /// caller put in `params`.
    pub fn build_request(&self, endpoint: &str, mut params: Params) -> HttpRequest {
        params.set(AUTH_PARAM, self.config.api_key.as_str());
        HttpRequest {
            url: join_url(&self.config.base_url, endpoint),
            query: params.to_query(),
            headers: vec![("User-Agent".to_string(), self.config.user_agent.clone())],
            timeout: self.config.timeout,
        }
    }

    /// Map a response to its JSON body, or to `HttpStatus` if it is not 2xx.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value> {
        if !response.is_success() {
            return Err(Error::HttpStatus {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Authenticate, GET `base_url + endpoint`, and decode the JSON body.
    pub fn dispatch(&self, endpoint: &str, params: Params) -> Result<Value> {
        let request = self.build_request(endpoint, params);
        tracing::debug!(endpoint, "dispatching request");
        let response = self.transport.execute(&request)?;
        tracing::debug!(endpoint, status = response.status, "received response");
        self.parse_response(response)
    }
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
