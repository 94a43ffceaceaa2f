//! Typed payloads for the HTML form endpoints.
//!
//! Every field arrives as text so that a bad value is reported next to its
//! input instead of failing the whole request. Bodies are decoded with
//! `serde_html_form` rules, so a key sent more than once fills a `Vec`. `validate` turns a payload into
//! the domain input the store accepts.

pub mod validation;

use serde::Deserialize;
use std::fmt;

use crate::models::{Artist, ArtistInput, ShowInput, Venue, VenueInput};
use validation::{
    MAX_DESCRIPTION_LEN, MAX_LINK_LEN, MAX_TEXT_LEN, optional, parse_checkbox, parse_genres,
    parse_id, parse_start_time, required,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

fn finish<T>(value: T, errors: Vec<FieldError>) -> Result<T, Vec<FieldError>> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(errors)
    }
}

fn or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn checkbox_value(checked: bool) -> Option<String> {
    checked.then(|| "y".to_string())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    /// One entry per submitted `genres` value; each may hold a comma
    /// separated list.
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub image_link: String,
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(&self) -> Result<VenueInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let input = VenueInput {
            name: required("name", &self.name, MAX_TEXT_LEN, &mut errors),
            city: required("city", &self.city, MAX_TEXT_LEN, &mut errors),
            state: required("state", &self.state, MAX_TEXT_LEN, &mut errors),
            address: optional("address", &self.address, MAX_TEXT_LEN, &mut errors),
            phone: optional("phone", &self.phone, MAX_TEXT_LEN, &mut errors),
            genres: parse_genres("genres", &self.genres, &mut errors),
            facebook_link: optional(
                "facebook_link",
                &self.facebook_link,
                MAX_LINK_LEN,
                &mut errors,
            ),
            website: optional("website_link", &self.website_link, MAX_LINK_LEN, &mut errors),
            image_link: optional("image_link", &self.image_link, MAX_LINK_LEN, &mut errors),
            seeking_talent: parse_checkbox(self.seeking_talent.as_deref()),
            seeking_description: optional(
                "seeking_description",
                &self.seeking_description,
                MAX_DESCRIPTION_LEN,
                &mut errors,
            ),
        };
        finish(input, errors)
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: or_empty(venue.address.as_ref()),
            phone: or_empty(venue.phone.as_ref()),
            genres: venue.genres.clone(),
            facebook_link: or_empty(venue.facebook_link.as_ref()),
            website_link: or_empty(venue.website.as_ref()),
            image_link: or_empty(venue.image_link.as_ref()),
            seeking_talent: checkbox_value(venue.seeking_talent),
            seeking_description: or_empty(venue.seeking_description.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub image_link: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let input = ArtistInput {
            name: required("name", &self.name, MAX_TEXT_LEN, &mut errors),
            city: required("city", &self.city, MAX_TEXT_LEN, &mut errors),
            state: required("state", &self.state, MAX_TEXT_LEN, &mut errors),
            address: optional("address", &self.address, MAX_TEXT_LEN, &mut errors),
            phone: optional("phone", &self.phone, MAX_TEXT_LEN, &mut errors),
            genres: parse_genres("genres", &self.genres, &mut errors),
            facebook_link: optional(
                "facebook_link",
                &self.facebook_link,
                MAX_LINK_LEN,
                &mut errors,
            ),
            website: optional("website_link", &self.website_link, MAX_LINK_LEN, &mut errors),
            image_link: optional("image_link", &self.image_link, MAX_LINK_LEN, &mut errors),
            seeking_venue: parse_checkbox(self.seeking_venue.as_deref()),
            seeking_description: optional(
                "seeking_description",
                &self.seeking_description,
                MAX_DESCRIPTION_LEN,
                &mut errors,
            ),
        };
        finish(input, errors)
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            address: or_empty(artist.address.as_ref()),
            phone: or_empty(artist.phone.as_ref()),
            genres: artist.genres.clone(),
            facebook_link: or_empty(artist.facebook_link.as_ref()),
            website_link: or_empty(artist.website.as_ref()),
            image_link: or_empty(artist.image_link.as_ref()),
            seeking_venue: checkbox_value(artist.seeking_venue),
            seeking_description: or_empty(artist.seeking_description.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn validate(&self) -> Result<ShowInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let venue_id = parse_id("venue_id", &self.venue_id, &mut errors);
        let artist_id = parse_id("artist_id", &self.artist_id, &mut errors);
        let start_time = parse_start_time("start_time", &self.start_time, &mut errors);

        match start_time {
            Some(start_time) if errors.is_empty() => Ok(ShowInput {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

impl SearchForm {
    #[must_use]
    pub fn term(&self) -> &str {
        self.search_term.trim()
    }
}
