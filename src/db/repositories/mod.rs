pub mod artist;
pub mod show;
pub mod venue;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{artist_genres, prelude::*, shows, venue_genres};
use crate::models::show::is_upcoming;

const LIKE_ESCAPE: char = '!';

/// Case folding applied to names before they are stored for search and to
/// search terms before matching. SQLite's own `lower()` only folds ASCII.
pub(crate) fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Substring match of `term` against a column holding `fold_name` output.
///
/// `%`, `_` and `!` in the term match themselves rather than acting as
/// wildcards.
pub(crate) fn name_contains<C: ColumnTrait>(folded_column: C, term: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in fold_name(term).chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    Expr::col(folded_column).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// A genre table keyed by its owner's id and ordered by `position`.
pub(crate) trait GenreTable: EntityTrait {
    type Row: ActiveModelTrait<Entity = Self> + Send;

    fn owner_column() -> Self::Column;
    fn position_column() -> Self::Column;
    fn row(owner_id: i32, genre: &str, position: i32) -> Self::Row;
    fn genre(model: Self::Model) -> String;
}

impl GenreTable for VenueGenres {
    type Row = venue_genres::ActiveModel;

    fn owner_column() -> Self::Column {
        venue_genres::Column::VenueId
    }

    fn position_column() -> Self::Column {
        venue_genres::Column::Position
    }

    fn row(owner_id: i32, genre: &str, position: i32) -> Self::Row {
        venue_genres::ActiveModel {
            venue_id: Set(owner_id),
            genre: Set(genre.to_string()),
            position: Set(position),
        }
    }

    fn genre(model: Self::Model) -> String {
        model.genre
    }
}

impl GenreTable for ArtistGenres {
    type Row = artist_genres::ActiveModel;

    fn owner_column() -> Self::Column {
        artist_genres::Column::ArtistId
    }

    fn position_column() -> Self::Column {
        artist_genres::Column::Position
    }

    fn row(owner_id: i32, genre: &str, position: i32) -> Self::Row {
        artist_genres::ActiveModel {
            artist_id: Set(owner_id),
            genre: Set(genre.to_string()),
            position: Set(position),
        }
    }

    fn genre(model: Self::Model) -> String {
        model.genre
    }
}

pub(crate) async fn load_genres<G, C>(conn: &C, owner_id: i32) -> Result<Vec<String>, DbErr>
where
    G: GenreTable,
    C: ConnectionTrait,
{
    let rows = G::find()
        .filter(G::owner_column().eq(owner_id))
        .order_by_asc(G::position_column())
        .all(conn)
        .await?;

    Ok(rows.into_iter().map(G::genre).collect())
}

/// Replaces the owner's genres, keeping the submitted order.
pub(crate) async fn replace_genres<G, C>(
    conn: &C,
    owner_id: i32,
    genres: &[String],
) -> Result<(), DbErr>
where
    G: GenreTable,
    C: ConnectionTrait,
    G::Model: sea_orm::IntoActiveModel<G::Row>,
{
    G::delete_many()
        .filter(G::owner_column().eq(owner_id))
        .exec(conn)
        .await?;

    if genres.is_empty() {
        return Ok(());
    }

    let rows = genres
        .iter()
        .enumerate()
        .map(|(i, genre)| G::row(owner_id, genre, genre_position(i)));

    G::insert_many(rows).exec_without_returning(conn).await?;
    Ok(())
}

/// Which end of a show a count is grouped by.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ShowSide {
    Venue,
    Artist,
}

impl ShowSide {
    const fn column(self) -> shows::Column {
        match self {
            Self::Venue => shows::Column::VenueId,
            Self::Artist => shows::Column::ArtistId,
        }
    }

    const fn owner(self, show: &shows::Model) -> i32 {
        match self {
            Self::Venue => show.venue_id,
            Self::Artist => show.artist_id,
        }
    }
}

/// Upcoming show count per owner, for the given owners only.
pub(crate) async fn upcoming_counts<C: ConnectionTrait>(
    conn: &C,
    side: ShowSide,
    owner_ids: &[i32],
    now: DateTime<Utc>,
) -> Result<HashMap<i32, usize>, DbErr> {
    let mut counts = HashMap::new();
    if owner_ids.is_empty() {
        return Ok(counts);
    }

    let rows = Shows::find()
        .filter(side.column().is_in(owner_ids.iter().copied()))
        .all(conn)
        .await?;

    for show in rows {
        if is_upcoming(show.start_time, now) {
            *counts.entry(side.owner(&show)).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

pub(crate) fn genre_position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_name_handles_non_ascii() {
        assert_eq!(fold_name("CAFÉ OTO"), "café oto");
        assert_eq!(fold_name("ÆGIR"), "ægir");
    }
}
