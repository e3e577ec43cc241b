//! In-memory todo CRUD service core.
//!
//! # Overview
//! Implements the whole request surface of the todo service as a
//! synchronous function from a plain-data `HttpRequest` to a plain-data
//! `HttpResponse` (host-does-IO pattern). The host performs the actual
//! transport: the bundled axum server feeds it network traffic, and a
//! request/response gateway adapter can feed it translated platform
//! events. Both observe the same wire contract, because both call the
//! same `router::handle`.
//!
//! # Design
//! - `TodoStore` owns all records and the id counter; `SharedStore` adds
//!   the locking discipline concurrent hosts need.
//! - `router::handle` is the single dispatch point; every status code and
//!   error body is decided there.
//! - DTOs and response envelopes live in `types` and mirror the wire
//!   schema exactly.

pub mod error;
pub mod http;
pub mod router;
pub mod store;
pub mod types;

pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use router::handle;
pub use store::{SharedStore, TodoStore};
pub use types::{CreateTodo, Todo, UpdateTodo};
