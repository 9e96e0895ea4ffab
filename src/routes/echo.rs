//! The echo endpoint: validates the `input` query parameter and returns it
//! as a JSON message.
//!
//! Validation is a single pure predicate: the input must be non-empty and at
//! most [`MAX_INPUT_BYTES`] bytes. Nothing is escaped or rewritten; injection
//! safety rests on the response being JSON-encoded rather than interpolated
//! into HTML or a shell.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::config::MAX_INPUT_BYTES;
use crate::error::AppError;

/// Query parameters accepted by the echo endpoint.
///
/// An absent `input` parameter deserializes to the empty string and is
/// rejected by validation, the same outcome as `?input=`.
#[derive(Debug, Deserialize)]
pub struct EchoParams {
    #[serde(default)]
    pub input: String,
}

/// JSON payload returned on success.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: String,
}

/// Echo handler.
///
/// Method-agnostic; auth has already been enforced by the middleware layer by
/// the time this runs. Returns 400 `Invalid input` when the parameter is
/// empty or longer than [`MAX_INPUT_BYTES`] bytes, otherwise 200 with
/// `{"message":"Echo: <input>"}`.
pub async fn echo(Query(params): Query<EchoParams>) -> Result<Json<EchoResponse>, AppError> {
    let input = params.input;

    if input.is_empty() || input.len() > MAX_INPUT_BYTES {
        return Err(AppError::InvalidInput);
    }

    Ok(Json(EchoResponse {
        message: format!("Echo: {input}"),
    }))
}
