use axum::response::Html;

use super::Page;
use crate::api::flash::FlashMessage;

#[must_use]
pub fn home(flashes: &[FlashMessage]) -> Html<String> {
    Page::new("Home", flashes).render(
        r#"<h1>Fyyur</h1>
    <p>Discover live music: find a venue, book an artist, list a show.</p>
    <p>
      <a href="/venues/create">Post a venue</a> ·
      <a href="/artists/create">Post an artist</a> ·
      <a href="/shows/create">Post a show</a>
    </p>"#,
    )
}
