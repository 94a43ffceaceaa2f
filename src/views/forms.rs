use axum::response::Html;
use std::fmt::Write;

use super::{Page, attr, text};
use crate::api::flash::FlashMessage;
use crate::forms::validation::parse_checkbox;
use crate::forms::{ArtistForm, FieldError, ShowForm, VenueForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

impl FormMode {
    fn action(self, noun: &str) -> String {
        match self {
            Self::Create => format!("/{noun}/create"),
            Self::Edit(id) => format!("/{noun}/{id}/edit"),
        }
    }
}

fn field_errors(name: &str, errors: &[FieldError]) -> String {
    let mut html = String::new();
    for error in errors.iter().filter(|e| e.field == name) {
        let _ = write!(
            html,
            r#"<span class="error">{}</span>"#,
            text(&error.message)
        );
    }
    html
}

fn input(name: &str, label: &str, value: &str, errors: &[FieldError]) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
      <input id="{name}" name="{name}" value="{value}">{errors}"#,
        label = text(label),
        value = attr(value),
        errors = field_errors(name, errors),
    )
}

fn textarea(name: &str, label: &str, value: &str, errors: &[FieldError]) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
      <textarea id="{name}" name="{name}">{value}</textarea>{errors}"#,
        label = text(label),
        value = text(value),
        errors = field_errors(name, errors),
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>"#,
        checked = if checked { " checked" } else { "" },
        label = text(label),
    )
}

fn form_page(
    title: &str,
    action: &str,
    fields: &str,
    submit: &str,
    flashes: &[FlashMessage],
) -> Html<String> {
    Page::new(title, flashes).render(&format!(
        r#"<h1>{title}</h1>
    <form method="post" action="{action}">
      {fields}
      <p><button type="submit">{submit}</button></p>
    </form>"#,
        title = text(title),
    ))
}

/// Fields shared by the venue and artist forms, in display order.
#[allow(clippy::too_many_arguments)]
fn profile_fields(
    name: &str,
    city: &str,
    state: &str,
    address: &str,
    phone: &str,
    genres: &str,
    links: [&str; 3],
    errors: &[FieldError],
) -> String {
    let [image_link, website_link, facebook_link] = links;
    [
        input("name", "Name", name, errors),
        input("city", "City", city, errors),
        input("state", "State", state, errors),
        input("address", "Address", address, errors),
        input("phone", "Phone", phone, errors),
        input("genres", "Genres (comma separated)", genres, errors),
        input("image_link", "Image link", image_link, errors),
        input("website_link", "Website", website_link, errors),
        input("facebook_link", "Facebook link", facebook_link, errors),
    ]
    .join("\n      ")
}

#[must_use]
pub fn venue_form(
    mode: FormMode,
    form: &VenueForm,
    errors: &[FieldError],
    flashes: &[FlashMessage],
) -> Html<String> {
    let title = match mode {
        FormMode::Create => "List a new venue".to_string(),
        FormMode::Edit(_) => format!("Edit venue {}", form.name),
    };
    let fields = format!(
        "{}\n      {}\n      {}",
        profile_fields(
            &form.name,
            &form.city,
            &form.state,
            &form.address,
            &form.phone,
            &form.genres.join(", "),
            [&form.image_link, &form.website_link, &form.facebook_link],
            errors,
        ),
        checkbox(
            "seeking_talent",
            "Looking for talent",
            parse_checkbox(form.seeking_talent.as_deref())
        ),
        textarea(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors
        ),
    );
    let submit = match mode {
        FormMode::Create => "Create Venue",
        FormMode::Edit(_) => "Save Venue",
    };
    form_page(&title, &mode.action("venues"), &fields, submit, flashes)
}

#[must_use]
pub fn artist_form(
    mode: FormMode,
    form: &ArtistForm,
    errors: &[FieldError],
    flashes: &[FlashMessage],
) -> Html<String> {
    let title = match mode {
        FormMode::Create => "List a new artist".to_string(),
        FormMode::Edit(_) => format!("Edit artist {}", form.name),
    };
    let fields = format!(
        "{}\n      {}\n      {}",
        profile_fields(
            &form.name,
            &form.city,
            &form.state,
            &form.address,
            &form.phone,
            &form.genres.join(", "),
            [&form.image_link, &form.website_link, &form.facebook_link],
            errors,
        ),
        checkbox(
            "seeking_venue",
            "Looking for venues",
            parse_checkbox(form.seeking_venue.as_deref())
        ),
        textarea(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors
        ),
    );
    let submit = match mode {
        FormMode::Create => "Create Artist",
        FormMode::Edit(_) => "Save Artist",
    };
    form_page(&title, &mode.action("artists"), &fields, submit, flashes)
}

#[must_use]
pub fn show_form(form: &ShowForm, errors: &[FieldError], flashes: &[FlashMessage]) -> Html<String> {
    let fields = [
        input("artist_id", "Artist ID", &form.artist_id, errors),
        input("venue_id", "Venue ID", &form.venue_id, errors),
        input(
            "start_time",
            "Start time (YYYY-MM-DD HH:MM:SS, UTC)",
            &form.start_time,
            errors,
        ),
    ]
    .join("\n      ");
    form_page(
        "List a new show",
        "/shows/create",
        &fields,
        "Create Show",
        flashes,
    )
}
