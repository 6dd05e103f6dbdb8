//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::client::RaClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse, Transport};

pub const API_KEY: &str = "abc123";

/// Records every request and replies with a fixed response.
pub struct Recorder {
    pub requests: RefCell<Vec<HttpRequest>>,
    status: u16,
    body: Vec<u8>,
}

impl Recorder {
    pub fn new(status: u16, body: &str) -> Self {
        Self::with_bytes(status, body.as_bytes())
    }

    pub fn with_bytes(status: u16, body: &[u8]) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            status,
            body: body.to_vec(),
        }
    }

    pub fn count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for Recorder {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        Ok(HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body: self.body.clone(),
        })
    }
}

/// Client keyed with `API_KEY` whose transport answers `200 {}`.
pub fn client() -> RaClient<Recorder> {
    RaClient::with_transport(ClientConfig::new(API_KEY), Recorder::new(200, "{}"))
}

/// Endpoint file name of the last request.
pub fn endpoint(client: &RaClient<Recorder>) -> String {
    let url = client.transport().last().url;
    url.rsplit('/').next().unwrap_or_default().to_string()
}

/// Query of the last request as a map.
pub fn query(client: &RaClient<Recorder>) -> BTreeMap<String, String> {
    client.transport().last().query.into_iter().collect()
}

/// Build an expected query map; the API key is added automatically.
pub fn expected(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    map.insert("y".to_string(), API_KEY.to_string());
    map
}
