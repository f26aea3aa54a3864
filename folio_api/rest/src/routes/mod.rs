use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod health;
pub mod listing;
pub mod pagination;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn invalid_token_error() -> Response {
    error(StatusCode::UNAUTHORIZED, "Invalid token")
}

fn invalid_query_string_error() -> Response {
    error(StatusCode::UNPROCESSABLE_ENTITY, "Invalid query string")
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}
