//! Axum front end for the todo service.
//!
//! # Design
//! The server is a thin transport adapter. It owns the listener and the
//! async runtime, while every routing and contract decision belongs to
//! `todo_api_core::router::handle`: a single fallback handler converts
//! the incoming request into the core's plain-data shape and copies the
//! core's response back out. Because the direct server and the gateway
//! entry point share one router, a non-integer id on `PUT /todos/{id}`
//! returns the core's 400 here too, not a framework-level 404.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use todo_api_core::error::ApiError;
use todo_api_core::http::{HttpRequest, HttpResponse};
use todo_api_core::router;
use todo_api_core::store::SharedStore;

/// Largest request body the adapter will buffer.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the application around `store`.
///
/// Every method and path lands in the same dispatch handler; the core
/// router decides what matches.
pub fn app(store: SharedStore) -> Router {
    Router::new().fallback(dispatch).with_state(store)
}

/// Serve `app` on `listener` until the process is stopped.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Translate one network request through the core router.
async fn dispatch(State(store): State<SharedStore>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let method = parts.method.as_str().to_string();
    let path = parts.uri.path().to_string();

    let headers = parts
        .headers
        .iter()
        .filter_map(|(name, value)| {
            let value = value.to_str().ok()?;
            Some((name.as_str().to_string(), value.to_string()))
        })
        .collect();

    let core_resp = match read_body(body).await {
        Ok(body) => router::handle(
            &store,
            &HttpRequest {
                method: method.clone(),
                path: path.clone(),
                headers,
                body,
            },
        ),
        Err(err) => router::error_response(&err),
    };

    info!(%method, %path, status = core_resp.status, "request");
    into_axum(core_resp)
}

/// Buffer the request body into a string.
///
/// Oversized and non-UTF-8 bodies cannot hold valid JSON for this API, so
/// they are rejected with the same wire error as malformed JSON.
async fn read_body(body: Body) -> Result<Option<String>, ApiError> {
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| ApiError::Validation("Invalid JSON in request body"))?;
    if bytes.is_empty() {
        return Ok(None);
    }
    let text = String::from_utf8(bytes.to_vec())
        .map_err(|_| ApiError::Validation("Invalid JSON in request body"))?;
    Ok(Some(text))
}

/// Copy a plain-data response onto the framework response type.
fn into_axum(resp: HttpResponse) -> Response {
    let status = StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut out = (status, resp.body).into_response();
    for (name, value) in resp.headers {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(_) => continue,
        };
        let value = match HeaderValue::from_str(&value) {
            Ok(value) => value,
            Err(_) => continue,
        };
        out.headers_mut().insert(name, value);
    }
    out
}
