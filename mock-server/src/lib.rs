//! Mock HTTP endpoints for exercising the blocking POST client.
//!
//! Three routes cover the client's observable behaviors: `/echo` returns the
//! request body byte-for-byte (and enforces the JSON content type), `/guarded`
//! checks HTTP Basic credentials, and `/status/{code}` replies with an
//! arbitrary status so non-2xx handling can be tested as data rather than as
//! a transport error.

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

/// Username the `/guarded` route accepts.
pub const USERNAME: &str = "myusername";

/// Password the `/guarded` route accepts.
pub const PASSWORD: &str = "mypassword";

/// The exact `Authorization` value `/guarded` expects:
/// `Basic base64("myusername:mypassword")`. Kept as a literal so the server
/// does not share an encoder with the client under test.
pub const AUTHORIZATION: &str = "Basic bXl1c2VybmFtZTpteXBhc3N3b3Jk";

#[derive(Debug, Serialize)]
pub struct GuardedReply {
    pub authenticated: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusReply {
    pub code: u16,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", post(echo))
        .route("/guarded", post(guarded))
        .route("/status/{code}", post(fixed_status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Echo the request body back unchanged. Rejects non-JSON content types so
/// tests prove the client always sends `Content-Type: application/json`.
async fn echo(headers: HeaderMap, body: String) -> Response {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_json {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn guarded(headers: HeaderMap) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == AUTHORIZATION);
    if authorized {
        Json(GuardedReply { authenticated: true }).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(GuardedReply { authenticated: false })).into_response()
    }
}

/// Reply with the requested status code. Codes outside the real HTTP range
/// (100–599) get a 400; `StatusCode::from_u16` alone would accept up to 999.
async fn fixed_status(Path(code): Path<u16>) -> Result<Response, StatusCode> {
    if !(100..=599).contains(&code) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(StatusReply { code })).into_response())
}
