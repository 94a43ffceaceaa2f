use crate::models::{
    Area, Artist, ArtistDetail, ArtistInput, ArtistSummary, SearchResults, ShowInput,
    ShowListing, Venue, VenueDetail, VenueInput,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::entities::shows;

pub mod migrator;
pub mod repositories;
pub mod seed;

/// Errors raised by the data layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    Database(#[from] DbErr),
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");
        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection to `:memory:` would open its own empty database
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn venue_repo(&self) -> repositories::venue::VenueRepository {
        repositories::venue::VenueRepository::new(self.conn.clone())
    }

    fn artist_repo(&self) -> repositories::artist::ArtistRepository {
        repositories::artist::ArtistRepository::new(self.conn.clone())
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    // Venues

    pub async fn count_venues(&self) -> Result<u64, StoreError> {
        self.venue_repo().count().await
    }

    pub async fn get_venue(&self, id: i32) -> Result<Option<Venue>, StoreError> {
        self.venue_repo().get(id).await
    }

    pub async fn get_venue_detail(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<VenueDetail>, StoreError> {
        self.venue_repo().get_detail(id, now).await
    }

    pub async fn list_venue_areas(&self, now: DateTime<Utc>) -> Result<Vec<Area>, StoreError> {
        self.venue_repo().list_areas(now).await
    }

    pub async fn search_venues(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, StoreError> {
        self.venue_repo().search(term, now).await
    }

    pub async fn create_venue(&self, input: &VenueInput) -> Result<Venue, StoreError> {
        self.venue_repo().create(input).await
    }

    pub async fn update_venue(&self, id: i32, input: &VenueInput) -> Result<Venue, StoreError> {
        self.venue_repo().update(id, input).await
    }

    pub async fn delete_venue(&self, id: i32) -> Result<bool, StoreError> {
        self.venue_repo().delete(id).await
    }

    // Artists

    pub async fn count_artists(&self) -> Result<u64, StoreError> {
        self.artist_repo().count().await
    }

    pub async fn get_artist(&self, id: i32) -> Result<Option<Artist>, StoreError> {
        self.artist_repo().get(id).await
    }

    pub async fn get_artist_detail(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<ArtistDetail>, StoreError> {
        self.artist_repo().get_detail(id, now).await
    }

    pub async fn list_artists(&self) -> Result<Vec<ArtistSummary>, StoreError> {
        self.artist_repo().list_all().await
    }

    pub async fn search_artists(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, StoreError> {
        self.artist_repo().search(term, now).await
    }

    pub async fn create_artist(&self, input: &ArtistInput) -> Result<Artist, StoreError> {
        self.artist_repo().create(input).await
    }

    pub async fn update_artist(
        &self,
        id: i32,
        input: &ArtistInput,
    ) -> Result<Artist, StoreError> {
        self.artist_repo().update(id, input).await
    }

    // Shows

    pub async fn count_shows(&self) -> Result<u64, StoreError> {
        self.show_repo().count().await
    }

    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, StoreError> {
        self.show_repo().list_all().await
    }

    pub async fn create_show(&self, input: &ShowInput) -> Result<shows::Model, StoreError> {
        self.show_repo().create(input).await
    }
}
