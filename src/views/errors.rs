use axum::response::Html;

use super::{Page, text};
use crate::api::flash::FlashMessage;

fn error_page(title: &str, heading: &str, detail: &str, flashes: &[FlashMessage]) -> Html<String> {
    Page::new(title, flashes).render(&format!(
        r#"<h1>{}</h1>
    <p>{}</p>
    <p><a href="/">Back home</a></p>"#,
        text(heading),
        text(detail)
    ))
}

#[must_use]
pub fn not_found(detail: &str) -> Html<String> {
    error_page("Not Found", "404 Not Found", detail, &[])
}

#[must_use]
pub fn bad_request(detail: &str, flashes: &[FlashMessage]) -> Html<String> {
    error_page("Bad Request", "400 Bad Request", detail, flashes)
}

#[must_use]
pub fn server_error() -> Html<String> {
    error_page(
        "Server Error",
        "500 Internal Server Error",
        "Something went wrong on our end. Please try again later.",
        &[],
    )
}
