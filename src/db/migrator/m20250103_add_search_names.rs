use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use sea_orm_migration::prelude::*;

use crate::db::repositories::fold_name;
use crate::entities::{artists, venues};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Fresh databases already get the column from the initial schema
        if !manager.has_column("venues", "search_name").await? {
            add_search_name(manager, "venues").await?;
            backfill_venues(manager.get_connection()).await?;
        }

        if !manager.has_column("artists", "search_name").await? {
            add_search_name(manager, "artists").await?;
            backfill_artists(manager.get_connection()).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["venues", "artists"] {
            if manager.has_column(table, "search_name").await? {
                manager
                    .alter_table(
                        Table::alter()
                            .table(Alias::new(table))
                            .drop_column(SearchName::SearchName)
                            .to_owned(),
                    )
                    .await?;
            }
        }
        Ok(())
    }
}

async fn add_search_name(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    manager
        .alter_table(
            Table::alter()
                .table(Alias::new(table))
                .add_column(
                    ColumnDef::new(SearchName::SearchName)
                        .string()
                        .not_null()
                        .default(""),
                )
                .to_owned(),
        )
        .await
}

async fn backfill_venues<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    for model in venues::Entity::find().all(conn).await? {
        let folded = fold_name(&model.name);
        let mut active: venues::ActiveModel = model.into();
        active.search_name = Set(folded);
        active.update(conn).await?;
    }
    Ok(())
}

async fn backfill_artists<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    for model in artists::Entity::find().all(conn).await? {
        let folded = fold_name(&model.name);
        let mut active: artists::ActiveModel = model.into();
        active.search_name = Set(folded);
        active.update(conn).await?;
    }
    Ok(())
}

#[derive(DeriveIden)]
enum SearchName {
    SearchName,
}
