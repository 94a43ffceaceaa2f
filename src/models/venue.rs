use serde::Serialize;

use super::show::ShowAppearance;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

/// Validated field values for creating or overwriting a venue.
#[derive(Debug, Clone, Default)]
pub struct VenueInput {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<ShowAppearance>,
    pub upcoming_shows: Vec<ShowAppearance>,
}

impl VenueDetail {
    #[must_use]
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    #[must_use]
    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing a city and state, as grouped on the venues page.
#[derive(Debug, Clone, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}
