//! In-process stand-in for the RetroAchievements Web API.
//!
//! Serves `GET /API/{endpoint}` and echoes back what it received, so client
//! tests can assert on the exact endpoint, query and identity header that
//! went over the wire. Requests are authenticated with the `y` query
//! parameter like the real service.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

/// Body returned for every authenticated call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub endpoint: String,
    pub query: BTreeMap<String, String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
    };
    Router::new()
        .route("/API/{endpoint}", get(call_endpoint))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

async fn call_endpoint(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if !is_endpoint_file(&endpoint) {
        tracing::debug!(%endpoint, "unknown endpoint");
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    if query.get("y").map(String::as_str) != Some(&*state.api_key) {
        tracing::info!(%endpoint, "rejected unauthenticated request");
        let body = json!({
            "message": "Unauthenticated.",
            "errors": [{ "status": 401, "code": "unauthorized", "title": "Unauthenticated." }],
        });
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    tracing::info!(%endpoint, params = query.len(), "serving request");
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    Json(Echo {
        endpoint,
        query,
        user_agent,
    })
    .into_response()
}

fn is_endpoint_file(endpoint: &str) -> bool {
    endpoint.starts_with("API_") && endpoint.ends_with(".php")
}
