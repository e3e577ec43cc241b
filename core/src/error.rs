//! Error taxonomy for the todo API.
//!
//! # Design
//! Every failure a request can hit maps to exactly one variant, and every
//! variant maps to exactly one status code and wire message. The store
//! reports `Validation` and `NotFound`; the router adds `Unrouted` for
//! requests it cannot dispatch and `Internal` for anything unexpected,
//! such as a poisoned store lock. Nothing outside this module decides a
//! status code.

use std::fmt;

/// Errors surfaced by the store and the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request payload is malformed or missing a required field.
    /// Carries the exact wire message for the `error` field.
    Validation(&'static str),

    /// The referenced todo id does not exist.
    NotFound,

    /// No route matches the request's method and path.
    Unrouted,

    /// An unexpected failure. Details never reach the client.
    Internal,
}

impl ApiError {
    /// HTTP status code this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::NotFound | ApiError::Unrouted => 404,
            ApiError::Internal => 500,
        }
    }

    /// Message carried in the response's `error` field.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Validation(msg) => msg,
            ApiError::NotFound => "Todo not found",
            ApiError::Unrouted => "Not found",
            ApiError::Internal => "Internal server error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "validation failed: {msg}"),
            ApiError::NotFound => write!(f, "todo not found"),
            ApiError::Unrouted => write!(f, "no matching route"),
            ApiError::Internal => write!(f, "internal error"),
        }
    }
}

impl std::error::Error for ApiError {}
