use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::Config;
use crate::db::Store;

mod artists;
mod error;
mod extract;
pub mod flash;
mod observability;
mod pages;
mod shows;
mod venues;

pub use error::ApiError;
use flash::{FlashLevel, FlashMessage};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,

    pub config: Arc<Config>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

pub async fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(Arc::new(AppState {
        store,
        config: Arc::new(config),
        prometheus_handle,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = &state.config().server;
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_expiry_minutes,
        )));

    Router::new()
        .route("/", get(pages::index))
        .merge(venue_routes())
        .merge(artist_routes())
        .merge(show_routes())
        .route("/metrics", get(observability::get_metrics))
        .fallback(pages::not_found)
        .layer(session_layer)
        .with_state(state)
        .layer(CatchPanicLayer::custom(pages::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_requests))
}

fn venue_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/{id}",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/{id}/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )
}

fn artist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/{id}", get(artists::show_artist))
        .route(
            "/artists/{id}/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )
}

fn show_routes() -> Router<Arc<AppState>> {
    Router::new().route("/shows", get(shows::list_shows)).route(
        "/shows/create",
        get(shows::create_show_form).post(shows::create_show_submission),
    )
}

/// Queues `message` as a danger flash and re-renders the submitted form with
/// status 400.
async fn reject_form<F>(session: &Session, message: String, render: F) -> Response
where
    F: FnOnce(&[FlashMessage]) -> Html<String>,
{
    flash::push(session, FlashLevel::Danger, message).await;
    let flashes = flash::take(session).await;
    (StatusCode::BAD_REQUEST, render(&flashes)).into_response()
}

/// Queues a success flash and renders the home page, which drains it.
async fn listed(session: &Session, message: String) -> Response {
    flash::push(session, FlashLevel::Success, message).await;
    let flashes = flash::take(session).await;
    crate::views::home::home(&flashes).into_response()
}
