use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::{ShowSide, fold_name, load_genres, name_contains, replace_genres, upcoming_counts};
use crate::db::StoreError;
use crate::entities::{artists, prelude::*, shows};
use crate::models::show::split_by_time;
use crate::models::{
    Artist, ArtistDetail, ArtistInput, ArtistSummary, SearchHit, SearchResults, ShowAppearance,
};

pub struct ArtistRepository {
    conn: DatabaseConnection,
}

impl ArtistRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: artists::Model, genres: Vec<String>) -> Artist {
        Artist {
            id: model.id,
            name: model.name,
            genres,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            website: model.website,
            facebook_link: model.facebook_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
            image_link: model.image_link,
        }
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(Artists::find().count(&self.conn).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Artist>, StoreError> {
        let Some(model) = Artists::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let genres = load_genres::<ArtistGenres, _>(&self.conn, id).await?;
        Ok(Some(Self::map_model(model, genres)))
    }

    pub async fn get_detail(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<ArtistDetail>, StoreError> {
        let Some(artist) = self.get(id).await? else {
            return Ok(None);
        };

        let rows = Shows::find()
            .filter(shows::Column::ArtistId.eq(id))
            .order_by_asc(shows::Column::StartTime)
            .find_also_related(Venues)
            .all(&self.conn)
            .await?;

        let appearances = rows
            .into_iter()
            .filter_map(|(show, venue)| {
                venue.map(|venue| ShowAppearance {
                    counterpart_id: venue.id,
                    counterpart_name: venue.name,
                    counterpart_image_link: venue.image_link,
                    start_time: show.start_time,
                })
            })
            .collect();

        let (past_shows, upcoming_shows) = split_by_time(appearances, now);
        Ok(Some(ArtistDetail {
            artist,
            past_shows,
            upcoming_shows,
        }))
    }

    pub async fn list_all(&self) -> Result<Vec<ArtistSummary>, StoreError> {
        let rows = Artists::find()
            .order_by_asc(artists::Column::Name)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|a| ArtistSummary {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    pub async fn search(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, StoreError> {
        let rows = Artists::find()
            .filter(name_contains(artists::Column::SearchName, term))
            .order_by_asc(artists::Column::Name)
            .all(&self.conn)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|v| v.id).collect();
        let counts = upcoming_counts(&self.conn, ShowSide::Artist, &ids, now).await?;

        let hits = rows
            .into_iter()
            .map(|v| SearchHit {
                num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                name: v.name,
            })
            .collect();
        Ok(SearchResults::new(hits))
    }

    pub async fn create(&self, input: &ArtistInput) -> Result<Artist, StoreError> {
        let txn = self.conn.begin().await?;

        let model = artists::ActiveModel {
            name: Set(input.name.clone()),
            search_name: Set(fold_name(&input.name)),
            city: Set(input.city.clone()),
            state: Set(input.state.clone()),
            address: Set(input.address.clone()),
            phone: Set(input.phone.clone()),
            website: Set(input.website.clone()),
            facebook_link: Set(input.facebook_link.clone()),
            seeking_venue: Set(input.seeking_venue),
            seeking_description: Set(input.seeking_description.clone()),
            image_link: Set(input.image_link.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        replace_genres::<ArtistGenres, _>(&txn, model.id, &input.genres).await?;
        txn.commit().await?;

        info!(artist_id = model.id, "Listed artist: {}", model.name);
        Ok(Self::map_model(model, input.genres.clone()))
    }

    pub async fn update(&self, id: i32, input: &ArtistInput) -> Result<Artist, StoreError> {
        let txn = self.conn.begin().await?;

        let existing = Artists::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Artist", id })?;

        let mut active: artists::ActiveModel = existing.into();
        active.name = Set(input.name.clone());
        active.search_name = Set(fold_name(&input.name));
        active.city = Set(input.city.clone());
        active.state = Set(input.state.clone());
        active.address = Set(input.address.clone());
        active.phone = Set(input.phone.clone());
        active.website = Set(input.website.clone());
        active.facebook_link = Set(input.facebook_link.clone());
        active.seeking_venue = Set(input.seeking_venue);
        active.seeking_description = Set(input.seeking_description.clone());
        active.image_link = Set(input.image_link.clone());
        let model = active.update(&txn).await?;

        replace_genres::<ArtistGenres, _>(&txn, id, &input.genres).await?;
        txn.commit().await?;

        info!(artist_id = id, "Updated artist: {}", model.name);
        Ok(Self::map_model(model, input.genres.clone()))
    }
}
