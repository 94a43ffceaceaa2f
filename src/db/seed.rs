//! Sample venues, artists and shows for a fresh database.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use super::Store;
use crate::models::{ArtistInput, ShowInput, VenueInput};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn sample_venues() -> Vec<VenueInput> {
    vec![
        VenueInput {
            name: "The Musical Hop".to_string(),
            genres: owned(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: some("1015 Folsom Street"),
            phone: some("123-123-1234"),
            website: some("https://www.themusicalhop.com"),
            facebook_link: some("https://www.facebook.com/TheMusicalHop"),
            seeking_talent: true,
            seeking_description: some(
                "We are on the lookout for a local artist to play every two weeks. Please call us.",
            ),
            image_link: some(
                "https://images.unsplash.com/photo-1543900694-133f37abaaa5?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=60",
            ),
        },
        VenueInput {
            name: "The Dueling Pianos Bar".to_string(),
            genres: owned(&["Classical", "R&B", "Hip-Hop"]),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: some("335 Delancey Street"),
            phone: some("914-003-1132"),
            website: some("https://www.theduelingpianos.com"),
            facebook_link: some("https://www.facebook.com/theduelingpianos"),
            seeking_talent: false,
            seeking_description: None,
            image_link: some(
                "https://images.unsplash.com/photo-1497032205916-ac775f0649ae?ixlib=rb-1.2.1&auto=format&fit=crop&w=750&q=80",
            ),
        },
        VenueInput {
            name: "Park Square Live Music & Coffee".to_string(),
            genres: owned(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: some("34 Whiskey Moore Ave"),
            phone: some("415-000-1234"),
            website: some("https://www.parksquarelivemusicandcoffee.com"),
            facebook_link: some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee"),
            seeking_talent: false,
            seeking_description: None,
            image_link: some(
                "https://images.unsplash.com/photo-1485686531765-ba63b07845a7?ixlib=rb-1.2.1&auto=format&fit=crop&w=747&q=80",
            ),
        },
    ]
}

fn sample_artists() -> Vec<ArtistInput> {
    vec![
        ArtistInput {
            name: "Guns N Petals".to_string(),
            genres: owned(&["Rock n Roll"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: some("326-123-5000"),
            website: some("https://www.gunsnpetalsband.com"),
            facebook_link: some("https://www.facebook.com/GunsNPetals"),
            seeking_venue: true,
            seeking_description: some(
                "Looking for shows to perform at in the San Francisco Bay Area!",
            ),
            image_link: some(
                "https://images.unsplash.com/photo-1549213783-8284d0336c4f?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80",
            ),
            ..Default::default()
        },
        ArtistInput {
            name: "Matt Quevedo".to_string(),
            genres: owned(&["Jazz"]),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: some("300-400-5000"),
            facebook_link: some("https://www.facebook.com/mattquevedo923251523"),
            image_link: some(
                "https://images.unsplash.com/photo-1495223153807-b916f75de8c5?ixlib=rb-1.2.1&auto=format&fit=crop&w=334&q=80",
            ),
            ..Default::default()
        },
        ArtistInput {
            name: "The Wild Sax Band".to_string(),
            genres: owned(&["Jazz", "Classical"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: some("432-325-5432"),
            image_link: some(
                "https://images.unsplash.com/photo-1558369981-f9ca78462e61?ixlib=rb-1.2.1&auto=format&fit=crop&w=794&q=80",
            ),
            ..Default::default()
        },
    ]
}

/// `(venue index, artist index, start time)` into the sample lists above.
const SAMPLE_SHOWS: [(usize, usize, &str); 5] = [
    (0, 0, "2019-05-21T21:30:00.000Z"),
    (2, 1, "2019-06-15T23:00:00.000Z"),
    (2, 2, "2035-04-01T20:00:00.000Z"),
    (2, 2, "2035-04-08T20:00:00.000Z"),
    (2, 2, "2035-04-15T20:00:00.000Z"),
];

/// Inserts the sample data. Refuses to run against a database that already
/// lists venues.
pub async fn seed_sample_data(store: &Store) -> Result<SeedSummary> {
    if store.count_venues().await? > 0 {
        anyhow::bail!("Database already contains venues, refusing to seed");
    }

    let mut venue_ids = Vec::new();
    for input in sample_venues() {
        venue_ids.push(store.create_venue(&input).await?.id);
    }

    let mut artist_ids = Vec::new();
    for input in sample_artists() {
        artist_ids.push(store.create_artist(&input).await?.id);
    }

    for (venue, artist, start) in SAMPLE_SHOWS {
        let start_time = DateTime::parse_from_rfc3339(start)
            .with_context(|| format!("Invalid sample show time: {start}"))?
            .with_timezone(&Utc);

        store
            .create_show(&ShowInput {
                venue_id: venue_ids[venue],
                artist_id: artist_ids[artist],
                start_time,
            })
            .await?;
    }

    let summary = SeedSummary {
        venues: venue_ids.len(),
        artists: artist_ids.len(),
        shows: SAMPLE_SHOWS.len(),
    };
    info!(?summary, "Seeded sample data");
    Ok(summary)
}
