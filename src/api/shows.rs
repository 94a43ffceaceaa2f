use axum::{
    extract::State,
    response::{Html, Response},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::error;

use super::extract::FormBody;
use super::flash;
use super::{ApiError, AppState, listed, reject_form};
use crate::forms::ShowForm;
use crate::views;

const SHOW_FAILED: &str = "An error occurred. Show could not be listed.";

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, ApiError> {
    let shows = state.store().list_shows().await?;
    let flashes = flash::take(&session).await;
    Ok(views::shows::list(&shows, &flashes))
}

pub async fn create_show_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    views::forms::show_form(&ShowForm::default(), &[], &flashes)
}

pub async fn create_show_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    FormBody(form): FormBody<ShowForm>,
) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return reject_form(&session, SHOW_FAILED.to_string(), |flashes| {
                views::forms::show_form(&form, &errors, flashes)
            })
            .await;
        }
    };

    match state.store().create_show(&input).await {
        Ok(_) => listed(&session, "Show was successfully listed!".to_string()).await,
        Err(e) => {
            error!(
                error = %e,
                venue_id = input.venue_id,
                artist_id = input.artist_id,
                "Failed to create show"
            );
            reject_form(&session, SHOW_FAILED.to_string(), |flashes| {
                views::forms::show_form(&form, &[], flashes)
            })
            .await
        }
    }
}
