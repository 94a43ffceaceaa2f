use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, PaginatorTrait, QueryOrder,
    Set, TransactionTrait,
};
use tracing::info;

use crate::db::StoreError;
use crate::entities::{prelude::*, shows};
use crate::models::{ShowInput, ShowListing};

pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(Shows::find().count(&self.conn).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<ShowListing>, StoreError> {
        let rows = Shows::find()
            .order_by_asc(shows::Column::StartTime)
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await?;

        let venues = rows.load_one(Venues, &self.conn).await?;
        let artists = rows.load_one(Artists, &self.conn).await?;

        Ok(rows
            .into_iter()
            .zip(venues)
            .zip(artists)
            .filter_map(|((show, venue), artist)| {
                let (venue, artist) = (venue?, artist?);
                Some(ShowListing {
                    id: show.id,
                    venue_id: venue.id,
                    venue_name: venue.name,
                    artist_id: artist.id,
                    artist_name: artist.name,
                    artist_image_link: artist.image_link,
                    start_time: show.start_time,
                })
            })
            .collect())
    }

    /// Inserts a show. A venue or artist id with no matching row fails on the
    /// foreign key and nothing is written.
    pub async fn create(&self, input: &ShowInput) -> Result<shows::Model, StoreError> {
        let txn = self.conn.begin().await?;

        let model = shows::ActiveModel {
            venue_id: Set(input.venue_id),
            artist_id: Set(input.artist_id),
            start_time: Set(input.start_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            show_id = model.id,
            venue_id = model.venue_id,
            artist_id = model.artist_id,
            "Listed show starting {}",
            model.start_time
        );
        Ok(model)
    }
}
