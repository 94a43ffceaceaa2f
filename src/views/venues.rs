use axum::response::Html;
use std::fmt::Write;

use super::layout::{genre_tags, image, maybe_link};
use super::shows::appearances;
use super::{Page, SearchTarget, text};
use crate::api::flash::FlashMessage;
use crate::models::{Area, VenueDetail};

#[must_use]
pub fn list(areas: &[Area], flashes: &[FlashMessage]) -> Html<String> {
    let mut body = String::from("<h1>Venues</h1>");
    if areas.is_empty() {
        body.push_str(r#"<p>No venues listed yet. <a href="/venues/create">Post one</a>.</p>"#);
    }

    for area in areas {
        let _ = write!(
            body,
            r#"<h3>{}, {}</h3><ul class="items">"#,
            text(&area.city),
            text(&area.state)
        );
        for venue in &area.venues {
            let _ = write!(
                body,
                r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming shows</small></li>"#,
                venue.id,
                text(&venue.name),
                venue.num_upcoming_shows
            );
        }
        body.push_str("</ul>");
    }

    Page::new("Venues", flashes)
        .with_search(SearchTarget::Venues)
        .render(&body)
}

#[must_use]
pub fn detail(detail: &VenueDetail, flashes: &[FlashMessage]) -> Html<String> {
    let venue = &detail.venue;

    let seeking = if venue.seeking_talent {
        format!(
            r#"<p class="seeking">Currently seeking talent: {}</p>"#,
            text(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<article class="venue" data-id="{id}">
      <h1>{name}</h1>
      <p class="subtitle">ID: {id}</p>
      {genres}
      <p>{city}, {state}</p>
      <p>{address}</p>
      <p>{phone}</p>
      {website}
      {facebook}
      {seeking}
      {image}
      <p><a href="/venues/{id}/edit">Edit</a></p>
    </article>
    {past}
    {upcoming}"#,
        id = venue.id,
        name = text(&venue.name),
        genres = genre_tags(&venue.genres),
        city = text(&venue.city),
        state = text(&venue.state),
        address = text(venue.address.as_deref().unwrap_or("No address")),
        phone = text(venue.phone.as_deref().unwrap_or("No phone")),
        website = maybe_link("Website", venue.website.as_deref()),
        facebook = maybe_link("Facebook", venue.facebook_link.as_deref()),
        image = image(venue.image_link.as_deref(), &venue.name),
        past = appearances("Past Shows", "past-shows", &detail.past_shows, "/artists"),
        upcoming = appearances(
            "Upcoming Shows",
            "upcoming-shows",
            &detail.upcoming_shows,
            "/artists"
        ),
    );

    Page::new(&venue.name, flashes).render(&body)
}
