use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::error;

use super::extract::{EntityId, FormBody};
use super::flash::{self, FlashLevel};
use super::{ApiError, AppState, listed, reject_form};
use crate::db::StoreError;
use crate::forms::{ArtistForm, SearchForm};
use crate::views::{self, SearchTarget, forms::FormMode};

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, ApiError> {
    let artists = state.store().list_artists().await?;
    let flashes = flash::take(&session).await;
    Ok(views::artists::list(&artists, &flashes))
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
    FormBody(form): FormBody<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let results = state
        .store()
        .search_artists(form.term(), Utc::now())
        .await?;
    let flashes = flash::take(&session).await;
    Ok(views::search::results(
        SearchTarget::Artists,
        form.term(),
        &results,
        &flashes,
    ))
}

pub async fn show_artist(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>, ApiError> {
    let detail = state
        .store()
        .get_artist_detail(id, Utc::now())
        .await?
        .ok_or_else(|| ApiError::not_found("Artist", id))?;
    let flashes = flash::take(&session).await;
    Ok(views::artists::detail(&detail, &flashes))
}

pub async fn create_artist_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    views::forms::artist_form(FormMode::Create, &ArtistForm::default(), &[], &flashes)
}

pub async fn create_artist_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    FormBody(form): FormBody<ArtistForm>,
) -> Response {
    let failed = format!("An error occurred. Artist {} could not be listed.", form.name);

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return reject_form(&session, failed, |flashes| {
                views::forms::artist_form(FormMode::Create, &form, &errors, flashes)
            })
            .await;
        }
    };

    match state.store().create_artist(&input).await {
        Ok(artist) => {
            listed(
                &session,
                format!("Artist {} was successfully listed!", artist.name),
            )
            .await
        }
        Err(e) => {
            error!(error = %e, name = %input.name, "Failed to create artist");
            reject_form(&session, failed, |flashes| {
                views::forms::artist_form(FormMode::Create, &form, &[], flashes)
            })
            .await
        }
    }
}

pub async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>, ApiError> {
    let artist = state
        .store()
        .get_artist(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artist", id))?;
    let flashes = flash::take(&session).await;
    Ok(views::forms::artist_form(
        FormMode::Edit(id),
        &ArtistForm::from(&artist),
        &[],
        &flashes,
    ))
}

pub async fn edit_artist_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
    FormBody(form): FormBody<ArtistForm>,
) -> Result<Response, ApiError> {
    let failed = format!("An error occurred. Artist {} could not be updated.", form.name);

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(reject_form(&session, failed, |flashes| {
                views::forms::artist_form(FormMode::Edit(id), &form, &errors, flashes)
            })
            .await);
        }
    };

    match state.store().update_artist(id, &input).await {
        Ok(artist) => {
            flash::push(
                &session,
                FlashLevel::Success,
                format!("Artist {} was successfully updated!", artist.name),
            )
            .await;
            Ok(Redirect::to(&format!("/artists/{id}")).into_response())
        }
        Err(e @ StoreError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            error!(error = %e, artist_id = id, "Failed to update artist");
            Ok(reject_form(&session, failed, |flashes| {
                views::forms::artist_form(FormMode::Edit(id), &form, &[], flashes)
            })
            .await)
        }
    }
}
