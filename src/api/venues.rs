use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info, warn};

use super::extract::{EntityId, FormBody};
use super::flash::{self, FlashLevel};
use super::{ApiError, AppState, listed, reject_form};
use crate::db::StoreError;
use crate::forms::{SearchForm, VenueForm};
use crate::views::{self, SearchTarget, forms::FormMode};

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, ApiError> {
    let areas = state.store().list_venue_areas(Utc::now()).await?;
    let flashes = flash::take(&session).await;
    Ok(views::venues::list(&areas, &flashes))
}

pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
    FormBody(form): FormBody<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let results = state.store().search_venues(form.term(), Utc::now()).await?;
    let flashes = flash::take(&session).await;
    Ok(views::search::results(
        SearchTarget::Venues,
        form.term(),
        &results,
        &flashes,
    ))
}

pub async fn show_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>, ApiError> {
    let detail = state
        .store()
        .get_venue_detail(id, Utc::now())
        .await?
        .ok_or_else(|| ApiError::not_found("Venue", id))?;
    let flashes = flash::take(&session).await;
    Ok(views::venues::detail(&detail, &flashes))
}

pub async fn create_venue_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    views::forms::venue_form(FormMode::Create, &VenueForm::default(), &[], &flashes)
}

pub async fn create_venue_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    FormBody(form): FormBody<VenueForm>,
) -> Response {
    let failed = format!("An error occurred. Venue {} could not be listed.", form.name);

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return reject_form(&session, failed, |flashes| {
                views::forms::venue_form(FormMode::Create, &form, &errors, flashes)
            })
            .await;
        }
    };

    match state.store().create_venue(&input).await {
        Ok(venue) => {
            listed(
                &session,
                format!("Venue {} was successfully listed!", venue.name),
            )
            .await
        }
        Err(e) => {
            error!(error = %e, name = %input.name, "Failed to create venue");
            reject_form(&session, failed, |flashes| {
                views::forms::venue_form(FormMode::Create, &form, &[], flashes)
            })
            .await
        }
    }
}

pub async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
) -> Result<Html<String>, ApiError> {
    let venue = state
        .store()
        .get_venue(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Venue", id))?;
    let flashes = flash::take(&session).await;
    Ok(views::forms::venue_form(
        FormMode::Edit(id),
        &VenueForm::from(&venue),
        &[],
        &flashes,
    ))
}

pub async fn edit_venue_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    EntityId(id): EntityId,
    FormBody(form): FormBody<VenueForm>,
) -> Result<Response, ApiError> {
    let failed = format!("An error occurred. Venue {} could not be updated.", form.name);

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(reject_form(&session, failed, |flashes| {
                views::forms::venue_form(FormMode::Edit(id), &form, &errors, flashes)
            })
            .await);
        }
    };

    match state.store().update_venue(id, &input).await {
        Ok(venue) => {
            flash::push(
                &session,
                FlashLevel::Success,
                format!("Venue {} was successfully updated!", venue.name),
            )
            .await;
            Ok(Redirect::to(&format!("/venues/{id}")).into_response())
        }
        Err(e @ StoreError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            error!(error = %e, venue_id = id, "Failed to update venue");
            Ok(reject_form(&session, failed, |flashes| {
                views::forms::venue_form(FormMode::Edit(id), &form, &[], flashes)
            })
            .await)
        }
    }
}

/// Always answers 204; a failed delete is rolled back and only logged.
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> StatusCode {
    match state.store().delete_venue(id).await {
        Ok(true) => info!(venue_id = id, "Deleted venue"),
        Ok(false) => warn!(venue_id = id, "Delete requested for unknown venue"),
        Err(e) => error!(error = %e, venue_id = id, "Failed to delete venue"),
    }
    StatusCode::NO_CONTENT
}
