use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_shows_venue_id")
                    .table(Shows::Table)
                    .col(Shows::VenueId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shows_artist_id")
                    .table(Shows::Table)
                    .col(Shows::ArtistId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Listing orders by start time
        manager
            .create_index(
                Index::create()
                    .name("idx_shows_start_time")
                    .table(Shows::Table)
                    .col(Shows::StartTime)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_shows_start_time",
            "idx_shows_artist_id",
            "idx_shows_venue_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Shows::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum Shows {
    Table,
    VenueId,
    ArtistId,
    StartTime,
}
