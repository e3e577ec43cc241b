//! Domain DTOs and response envelopes for the todo API.
//!
//! # Design
//! Request payloads (`CreateTodo`, `UpdateTodo`) spell out exactly which
//! fields a client may send for each operation, so validation happens at
//! the deserialization boundary and the store only ever sees well-formed
//! input. Response envelopes mirror the wire schema one-to-one; handlers
//! never assemble ad-hoc JSON.

use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present
/// in the JSON are applied; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body of `GET /todos`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// Body wrapping a single record, returned by create and update.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoEnvelope {
    pub todo: Todo,
}

/// Plain confirmation body, returned by delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /`, a static description of the service.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}
