//! Plain-data HTTP types shared by every hosting mode.
//!
//! # Design
//! The router consumes an `HttpRequest` and produces an `HttpResponse`
//! without touching the network. Each host translates its native shape
//! into these types at the boundary: the bundled axum server converts
//! hyper requests, and a gateway adapter converts platform events. All
//! fields use owned types (`String`, `Vec`) so values can cross process
//! and serialization boundaries without lifetime concerns.

/// HTTP method of a routed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Parse a method token. Anything outside the routed set returns
    /// `None`, which the router treats as an unmatched route.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

/// An incoming HTTP request described as plain data.
///
/// The method stays a raw token here: a gateway event can carry anything,
/// and unknown methods must route to a 404 rather than fail to construct
/// a request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An outgoing HTTP response described as plain data.
///
/// Produced by the router; the host copies status, headers, and body onto
/// its native response type.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_routed_methods() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("POST"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::parse("PUT"), Some(HttpMethod::Put));
        assert_eq!(HttpMethod::parse("DELETE"), Some(HttpMethod::Delete));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(HttpMethod::parse("PATCH"), None);
        assert_eq!(HttpMethod::parse("get"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }
}
