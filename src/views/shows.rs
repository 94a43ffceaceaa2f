use axum::response::Html;
use std::fmt::Write;

use super::{DateFormat, Page, format_datetime, text};
use crate::api::flash::FlashMessage;
use crate::models::{ShowAppearance, ShowListing};

#[must_use]
pub fn list(shows: &[ShowListing], flashes: &[FlashMessage]) -> Html<String> {
    let mut items = String::new();
    for show in shows {
        let _ = write!(
            items,
            r#"<li class="show">
        <a href="/artists/{artist_id}">{artist}</a> playing at
        <a href="/venues/{venue_id}">{venue}</a>
        <time datetime="{iso}">{when}</time>
      </li>"#,
            artist_id = show.artist_id,
            artist = text(&show.artist_name),
            venue_id = show.venue_id,
            venue = text(&show.venue_name),
            iso = show.start_time.to_rfc3339(),
            when = format_datetime(show.start_time, DateFormat::Full),
        );
    }

    let body = if shows.is_empty() {
        r#"<h1>Shows</h1><p>No shows listed yet. <a href="/shows/create">Post one</a>.</p>"#
            .to_string()
    } else {
        format!(r#"<h1>Shows</h1><ul class="items shows">{items}</ul>"#)
    };
    Page::new("Shows", flashes).render(&body)
}

/// The past or upcoming block of a venue or artist page. `link_prefix` is
/// where the counterpart lives (`/artists` on a venue page).
pub(crate) fn appearances(
    heading: &str,
    class: &str,
    shows: &[ShowAppearance],
    link_prefix: &str,
) -> String {
    let mut html = format!(
        r#"<section class="{class}"><h2>{count} {heading}</h2><ul class="items">"#,
        count = shows.len(),
        heading = text(heading),
    );
    for show in shows {
        let _ = write!(
            html,
            r#"<li><a href="{link_prefix}/{id}">{name}</a> <time>{when}</time></li>"#,
            id = show.counterpart_id,
            name = text(&show.counterpart_name),
            when = format_datetime(show.start_time, DateFormat::Medium),
        );
    }
    html.push_str("</ul></section>");
    html
}
