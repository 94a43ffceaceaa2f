pub mod prelude;

pub mod artist_genres;
pub mod artists;
pub mod shows;
pub mod venue_genres;
pub mod venues;
