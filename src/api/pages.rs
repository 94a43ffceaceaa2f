use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::any::Any;
use tower_sessions::Session;

use super::flash;
use crate::views;

pub async fn index(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    views::home::home(&flashes)
}

pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        views::errors::not_found(&format!("Nothing lives at {}", uri.path())),
    )
        .into_response()
}

/// Turns a handler panic into the 500 page instead of a dropped connection.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "Request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, views::errors::server_error()).into_response()
}
