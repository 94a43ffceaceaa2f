use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::{ShowSide, fold_name, load_genres, name_contains, replace_genres, upcoming_counts};
use crate::db::StoreError;
use crate::entities::{prelude::*, shows, venue_genres, venues};
use crate::models::show::split_by_time;
use crate::models::{
    Area, SearchHit, SearchResults, ShowAppearance, Venue, VenueDetail, VenueInput,
    venue::VenueSummary,
};

pub struct VenueRepository {
    conn: DatabaseConnection,
}

impl VenueRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: venues::Model, genres: Vec<String>) -> Venue {
        Venue {
            id: model.id,
            name: model.name,
            genres,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            website: model.website,
            facebook_link: model.facebook_link,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
            image_link: model.image_link,
        }
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(Venues::find().count(&self.conn).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Venue>, StoreError> {
        let Some(model) = Venues::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let genres = load_genres::<VenueGenres, _>(&self.conn, id).await?;
        Ok(Some(Self::map_model(model, genres)))
    }

    pub async fn get_detail(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<VenueDetail>, StoreError> {
        let Some(venue) = self.get(id).await? else {
            return Ok(None);
        };

        let rows = Shows::find()
            .filter(shows::Column::VenueId.eq(id))
            .order_by_asc(shows::Column::StartTime)
            .find_also_related(Artists)
            .all(&self.conn)
            .await?;

        let appearances = rows
            .into_iter()
            .filter_map(|(show, artist)| {
                artist.map(|artist| ShowAppearance {
                    counterpart_id: artist.id,
                    counterpart_name: artist.name,
                    counterpart_image_link: artist.image_link,
                    start_time: show.start_time,
                })
            })
            .collect();

        let (past_shows, upcoming_shows) = split_by_time(appearances, now);
        Ok(Some(VenueDetail {
            venue,
            past_shows,
            upcoming_shows,
        }))
    }

    /// All venues grouped by city and state, in city order.
    pub async fn list_areas(&self, now: DateTime<Utc>) -> Result<Vec<Area>, StoreError> {
        let rows = Venues::find()
            .order_by_asc(venues::Column::City)
            .order_by_asc(venues::Column::State)
            .order_by_asc(venues::Column::Name)
            .all(&self.conn)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|v| v.id).collect();
        let counts = upcoming_counts(&self.conn, ShowSide::Venue, &ids, now).await?;

        let mut areas: Vec<Area> = Vec::new();
        for venue in rows {
            let summary = VenueSummary {
                id: venue.id,
                num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
                name: venue.name,
            };

            match areas.last_mut() {
                Some(area) if area.city == venue.city && area.state == venue.state => {
                    area.venues.push(summary);
                }
                _ => areas.push(Area {
                    city: venue.city,
                    state: venue.state,
                    venues: vec![summary],
                }),
            }
        }
        Ok(areas)
    }

    pub async fn search(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, StoreError> {
        let rows = Venues::find()
            .filter(name_contains(venues::Column::SearchName, term))
            .order_by_asc(venues::Column::Name)
            .all(&self.conn)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|v| v.id).collect();
        let counts = upcoming_counts(&self.conn, ShowSide::Venue, &ids, now).await?;

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

    pub async fn create(&self, input: &VenueInput) -> Result<Venue, StoreError> {
        let txn = self.conn.begin().await?;

        let model = venues::ActiveModel {
            name: Set(input.name.clone()),
            search_name: Set(fold_name(&input.name)),
            city: Set(input.city.clone()),
            state: Set(input.state.clone()),
            address: Set(input.address.clone()),
            phone: Set(input.phone.clone()),
            website: Set(input.website.clone()),
            facebook_link: Set(input.facebook_link.clone()),
            seeking_talent: Set(input.seeking_talent),
            seeking_description: Set(input.seeking_description.clone()),
            image_link: Set(input.image_link.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        replace_genres::<VenueGenres, _>(&txn, model.id, &input.genres).await?;
        txn.commit().await?;

        info!(venue_id = model.id, "Listed venue: {}", model.name);
        Ok(Self::map_model(model, input.genres.clone()))
    }

    pub async fn update(&self, id: i32, input: &VenueInput) -> Result<Venue, StoreError> {
        let txn = self.conn.begin().await?;

        let existing = Venues::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound { entity: "Venue", id })?;

        let mut active: venues::ActiveModel = existing.into();
        active.name = Set(input.name.clone());
        active.search_name = Set(fold_name(&input.name));
        active.city = Set(input.city.clone());
        active.state = Set(input.state.clone());
        active.address = Set(input.address.clone());
        active.phone = Set(input.phone.clone());
        active.website = Set(input.website.clone());
        active.facebook_link = Set(input.facebook_link.clone());
        active.seeking_talent = Set(input.seeking_talent);
        active.seeking_description = Set(input.seeking_description.clone());
        active.image_link = Set(input.image_link.clone());
        let model = active.update(&txn).await?;

        replace_genres::<VenueGenres, _>(&txn, id, &input.genres).await?;
        txn.commit().await?;

        info!(venue_id = id, "Updated venue: {}", model.name);
        Ok(Self::map_model(model, input.genres.clone()))
    }

    /// Removes the venue together with its shows and genres.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let txn = self.conn.begin().await?;

        Shows::delete_many()
            .filter(shows::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;
        VenueGenres::delete_many()
            .filter(venue_genres::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;
        let result = Venues::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!(venue_id = id, "Removed venue");
        }
        Ok(removed)
    }
}
