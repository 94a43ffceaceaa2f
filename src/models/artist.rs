use serde::Serialize;

use super::show::ShowAppearance;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArtistInput {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ShowAppearance>,
    pub upcoming_shows: Vec<ShowAppearance>,
}

impl ArtistDetail {
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
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}
