pub mod artist;
pub mod show;
pub mod venue;

use serde::Serialize;

pub use artist::{Artist, ArtistDetail, ArtistInput, ArtistSummary};
pub use show::{ShowAppearance, ShowInput, ShowListing};
pub use venue::{Area, Venue, VenueDetail, VenueInput};

/// One row of a name search: the match and how many of its shows are still ahead.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    #[must_use]
    pub fn new(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
