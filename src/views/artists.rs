use axum::response::Html;
use std::fmt::Write;

use super::layout::{genre_tags, image, maybe_link};
use super::shows::appearances;
use super::{Page, SearchTarget, text};
use crate::api::flash::FlashMessage;
use crate::models::{ArtistDetail, ArtistSummary};

#[must_use]
pub fn list(artists: &[ArtistSummary], flashes: &[FlashMessage]) -> Html<String> {
    let mut body = String::from("<h1>Artists</h1>");
    if artists.is_empty() {
        body.push_str(r#"<p>No artists listed yet. <a href="/artists/create">Post one</a>.</p>"#);
    } else {
        body.push_str(r#"<ul class="items">"#);
        for artist in artists {
            let _ = write!(
                body,
                r#"<li><a href="/artists/{}">{}</a></li>"#,
                artist.id,
                text(&artist.name)
            );
        }
        body.push_str("</ul>");
    }

    Page::new("Artists", flashes)
        .with_search(SearchTarget::Artists)
        .render(&body)
}

#[must_use]
pub fn detail(detail: &ArtistDetail, flashes: &[FlashMessage]) -> Html<String> {
    let artist = &detail.artist;

    let seeking = if artist.seeking_venue {
        format!(
            r#"<p class="seeking">Currently seeking performance venues: {}</p>"#,
            text(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<article class="artist" data-id="{id}">
      <h1>{name}</h1>
      <p class="subtitle">ID: {id}</p>
      {genres}
      <p>{city}, {state}</p>
      <p>{phone}</p>
      {website}
      {facebook}
      {seeking}
      {image}
      <p><a href="/artists/{id}/edit">Edit</a></p>
    </article>
    {past}
    {upcoming}"#,
        id = artist.id,
        name = text(&artist.name),
        genres = genre_tags(&artist.genres),
        city = text(&artist.city),
        state = text(&artist.state),
        phone = text(artist.phone.as_deref().unwrap_or("No phone")),
        website = maybe_link("Website", artist.website.as_deref()),
        facebook = maybe_link("Facebook", artist.facebook_link.as_deref()),
        image = image(artist.image_link.as_deref(), &artist.name),
        past = appearances("Past Shows", "past-shows", &detail.past_shows, "/venues"),
        upcoming = appearances(
            "Upcoming Shows",
            "upcoming-shows",
            &detail.upcoming_shows,
            "/venues"
        ),
    );

    Page::new(&artist.name, flashes).render(&body)
}
