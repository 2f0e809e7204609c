//! Response builders shared by the interaction handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_json(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Returns a 401 with the plain-text body Discord's endpoint validation expects.
#[must_use]
pub fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "invalid request signature").into_response()
}
