use axum::response::Html;
use std::fmt::Write;

use super::{Page, SearchTarget, text};
use crate::api::flash::FlashMessage;
use crate::models::SearchResults;

#[must_use]
pub fn results(
    target: SearchTarget,
    search_term: &str,
    results: &SearchResults,
    flashes: &[FlashMessage],
) -> Html<String> {
    let mut items = String::new();
    for hit in &results.data {
        let _ = write!(
            items,
            r#"<li><a href="{}">{}</a> <small>{} upcoming shows</small></li>"#,
            target.link(hit.id),
            text(&hit.name),
            hit.num_upcoming_shows
        );
    }

    let noun = target.noun();
    Page::new("Search", flashes).with_search(target).render(&format!(
        r#"<h1>Number of search results for "{term}": {count}</h1>
    <ul class="items search-results" data-count="{count}">{items}</ul>
    <p><a href="/{noun}">All {noun}</a></p>"#,
        term = text(search_term),
        count = results.count,
    ))
}
