//! Request router: maps a (method, path, body) triple onto a store
//! operation and renders the outcome as an `HttpResponse`.
//!
//! # Design
//! Routing is one `match` over the parsed method and path. Every arm
//! returns `Result<HttpResponse, ApiError>` and the error path is rendered
//! in a single place, so each failure mode has exactly one status code and
//! one body no matter which host delivered the request. The router holds
//! no state of its own; it only borrows the shared store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::store::SharedStore;
use crate::types::{
    Confirmation, CreateTodo, ErrorBody, HealthStatus, ServiceInfo, TodoEnvelope, TodoList,
    UpdateTodo,
};

/// Version reported by `GET /`.
pub const API_VERSION: &str = "1.0.0";

/// Service name reported by `GET /health`.
pub const SERVICE_NAME: &str = "flask-api";

/// Route descriptors advertised by `GET /`.
const ENDPOINTS: [&str; 5] = [
    "GET /",
    "GET /todos",
    "POST /todos",
    "PUT /todos/<id>",
    "DELETE /todos/<id>",
];

/// Dispatch one request. This is the entry point shared by every hosting
/// mode; the direct server and any gateway adapter both call it.
pub fn handle(store: &SharedStore, req: &HttpRequest) -> HttpResponse {
    match route(store, req) {
        Ok(resp) => resp,
        Err(err) => error_response(&err),
    }
}

/// Render `err` as its wire response.
///
/// Public so host adapters can report their own boundary failures (for
/// example an unreadable request body) through the same contract.
pub fn error_response(err: &ApiError) -> HttpResponse {
    let body = ErrorBody {
        error: err.message().to_string(),
    };
    let body = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());
    HttpResponse {
        status: err.status(),
        headers: vec![content_type_json()],
        body,
    }
}

fn route(store: &SharedStore, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let method = HttpMethod::parse(&req.method).ok_or(ApiError::Unrouted)?;
    let body = req.body.as_deref();

    match (method, req.path.as_str()) {
        (HttpMethod::Get, "/") => json_response(200, &service_info()),
        (HttpMethod::Get, "/health") => json_response(200, &health()),
        (HttpMethod::Get, "/todos") => {
            let todos = store.list()?;
            json_response(200, &TodoList { todos })
        }
        (HttpMethod::Post, "/todos") => {
            let input: CreateTodo = decode_body(body, ApiError::Validation("Task is required"))?;
            let todo = store.create(input)?;
            json_response(201, &TodoEnvelope { todo })
        }
        (HttpMethod::Put, path) => {
            let id = todo_id(path)?;
            let patch: UpdateTodo =
                decode_body(body, ApiError::Validation("Invalid JSON in request body"))?;
            let todo = store.update(id, patch)?;
            json_response(200, &TodoEnvelope { todo })
        }
        (HttpMethod::Delete, path) => {
            let id = todo_id(path)?;
            store.delete(id)?;
            let message = Confirmation {
                message: "Todo deleted".to_string(),
            };
            json_response(200, &message)
        }
        _ => Err(ApiError::Unrouted),
    }
}

fn service_info() -> ServiceInfo {
    ServiceInfo {
        message: "Welcome to Simple Flask API!".to_string(),
        version: API_VERSION.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    }
}

fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    }
}

/// Extract the `{id}` segment from `/todos/{id}`.
///
/// Paths outside `/todos/` (and deeper paths such as `/todos/1/x`) are
/// unmatched routes; a present but non-integer segment is a validation
/// failure with its own wire message.
fn todo_id(path: &str) -> Result<u64, ApiError> {
    let segment = path
        .strip_prefix("/todos/")
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .ok_or(ApiError::Unrouted)?;
    segment
        .parse()
        .map_err(|_| ApiError::Validation("Invalid todo ID"))
}

/// Decode an optional request body into `T`.
///
/// A missing or blank body counts as the empty JSON object, so a bare
/// create still reports a missing task and a bare update is a no-op patch.
/// A body that is not well-formed JSON, or not a JSON object, is rejected
/// outright; a well-formed object that does not match `T` maps to
/// `on_mismatch`.
fn decode_body<T: DeserializeOwned>(body: Option<&str>, on_mismatch: ApiError) -> Result<T, ApiError> {
    let raw = body.map(str::trim).filter(|s| !s.is_empty()).unwrap_or("{}");
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|_| ApiError::Validation("Invalid JSON in request body"))?;
    if !value.is_object() {
        return Err(ApiError::Validation("Invalid JSON in request body"));
    }
    serde_json::from_value(value).map_err(|_| on_mismatch)
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<HttpResponse, ApiError> {
    let body = serde_json::to_string(body).map_err(|_| ApiError::Internal)?;
    Ok(HttpResponse {
        status,
        headers: vec![content_type_json()],
        body,
    })
}

fn content_type_json() -> (String, String) {
    ("content-type".to_string(), "application/json".to_string())
}
