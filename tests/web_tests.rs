//! End-to-end tests driving the HTML routes through the router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{TimeZone, Utc};
use fyyur::api::AppState;
use fyyur::config::Config;
use fyyur::models::{ArtistInput, ShowInput, VenueInput};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::ConnectionTrait;
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

async fn spawn_app() -> (Arc<AppState>, Router) {
    spawn_app_with(None).await
}

async fn spawn_app_with(prometheus: Option<PrometheusHandle>) -> (Arc<AppState>, Router) {
    let db_path =
        std::env::temp_dir().join(format!("fyyur-web-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = fyyur::api::create_app_state(config, prometheus)
        .await
        .expect("failed to create app state");
    let router = fyyur::api::router(state.clone());
    (state, router)
}

/// The recorder is process-global, so every test in this binary shares it.
fn prometheus_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install recorder")
        })
        .clone()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn venue(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        genres: vec!["Jazz".to_string()],
        ..Default::default()
    }
}

fn artist(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_home_page() {
    let (_, app) = spawn_app().await;

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Fyyur"));
    assert!(body.contains(r#"href="/venues/create""#));
}

#[tokio::test]
async fn test_unmatched_route_returns_404_page() {
    let (_, app) = spawn_app().await;

    let (status, body) = send(&app, get("/nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404 Not Found"));
}

#[tokio::test]
async fn test_create_venue_lists_it_with_flash() {
    let (state, app) = spawn_app().await;

    let (status, body) = send(
        &app,
        post_form(
            "/venues/create",
            "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
             &phone=123-123-1234&genres=Jazz%2C+Reggae&facebook_link=&seeking_talent=y",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alert-success"));
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));
    assert_eq!(state.store().count_venues().await.unwrap(), 1);

    let (status, body) = send(&app, get("/venues")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("San Francisco, CA"));
    assert!(body.contains("The Musical Hop"));

    let venues = state
        .store()
        .list_venue_areas(Utc::now())
        .await
        .unwrap();
    let created = &venues[0].venues[0];
    let stored = state.store().get_venue(created.id).await.unwrap().unwrap();
    assert_eq!(stored.genres, ["Jazz", "Reggae"]);
    assert!(stored.seeking_talent);
    assert_eq!(stored.facebook_link, None);
}

#[tokio::test]
async fn test_invalid_venue_is_rejected() {
    let (state, app) = spawn_app().await;

    let (status, body) = send(
        &app,
        post_form("/venues/create", "name=&city=San+Francisco&state=CA"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("alert-danger"));
    assert!(body.contains("could not be listed"));
    assert!(body.contains("is required"));
    assert_eq!(state.store().count_venues().await.unwrap(), 0);
}

#[tokio::test]
async fn test_venue_detail_for_missing_id_returns_404() {
    let (_, app) = spawn_app().await;

    let (status, body) = send(&app, get("/venues/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Venue 999 not found"));

    let (status, _) = send(&app, get("/artists/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let (_, app) = spawn_app().await;

    let (status, body) = send(&app, get("/venues/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("400 Bad Request"));
}

#[tokio::test]
async fn test_search_venues() {
    let (state, app) = spawn_app().await;
    state
        .store()
        .create_venue(&venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    state
        .store()
        .create_venue(&venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();

    let (status, body) = send(&app, post_form("/venues/search", "search_term=HOP")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-count="1""#));
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("The Dueling Pianos Bar"));
    assert!(body.contains(r#"Number of search results for "HOP": 1"#));

    let (_, body) = send(&app, post_form("/venues/search", "search_term=the")).await;
    assert!(body.contains(r#"data-count="2""#));

    let (_, body) = send(&app, post_form("/venues/search", "search_term=zzz")).await;
    assert!(body.contains(r#"data-count="0""#));

    // Wildcards in the term only match themselves
    let (_, body) = send(&app, post_form("/venues/search", "search_term=%25")).await;
    assert!(body.contains(r#"data-count="0""#));
}

#[tokio::test]
async fn test_upcoming_count_ignores_past_shows() {
    let (state, app) = spawn_app().await;
    let store = state.store();
    let hop = store
        .create_venue(&venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let band = store.create_artist(&artist("Guns N Petals")).await.unwrap();

    for start_time in [
        Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
        Utc::now() + chrono::Duration::days(30),
    ] {
        store
            .create_show(&ShowInput {
                venue_id: hop.id,
                artist_id: band.id,
                start_time,
            })
            .await
            .unwrap();
    }

    let (_, body) = send(&app, post_form("/venues/search", "search_term=hop")).await;
    assert!(body.contains("1 upcoming shows"));

    let (status, body) = send(&app, get(&format!("/venues/{}", hop.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 Past Shows"));
    assert!(body.contains("1 Upcoming Shows"));

    let (_, body) = send(&app, get(&format!("/artists/{}", band.id))).await;
    assert!(body.contains("1 Past Shows"));
    assert!(body.contains("1 Upcoming Shows"));
    assert!(body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_delete_venue_removes_only_that_row() {
    let (state, app) = spawn_app().await;
    let store = state.store();
    let hop = store
        .create_venue(&venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let bar = store
        .create_venue(&venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    let band = store.create_artist(&artist("Guns N Petals")).await.unwrap();
    store
        .create_show(&ShowInput {
            venue_id: hop.id,
            artist_id: band.id,
            start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
        })
        .await
        .unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/venues/{}", hop.id))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(store.count_venues().await.unwrap(), 1);
    assert_eq!(store.count_shows().await.unwrap(), 0);
    assert!(store.get_venue(hop.id).await.unwrap().is_none());
    assert!(store.get_venue(bar.id).await.unwrap().is_some());
    assert_eq!(store.count_artists().await.unwrap(), 1);

    let request = Request::builder()
        .method("DELETE")
        .uri("/venues/999")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(store.count_venues().await.unwrap(), 1);
}

#[tokio::test]
async fn test_edit_venue_updates_values() {
    let (state, app) = spawn_app().await;
    let hop = state
        .store()
        .create_venue(&venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();

    let (status, body) = send(&app, get(&format!("/venues/{}/edit", hop.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="The Musical Hop""#));

    let response = app
        .clone()
        .oneshot(post_form(
            &format!("/venues/{}/edit", hop.id),
            "name=The+Musical+Hop+Annex&city=Oakland&state=CA&genres=Swing%2C+Folk",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/venues/{}", hop.id)
    );

    let updated = state.store().get_venue(hop.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "The Musical Hop Annex");
    assert_eq!(updated.city, "Oakland");
    assert_eq!(updated.genres, ["Swing", "Folk"]);
    assert!(!updated.seeking_talent);
}

#[tokio::test]
async fn test_edit_missing_venue_returns_404() {
    let (_, app) = spawn_app().await;

    let (status, _) = send(&app, get("/venues/42/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        post_form("/venues/42/edit", "name=Ghost&city=Nowhere&state=NA"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_and_edit_artist() {
    let (state, app) = spawn_app().await;

    let (status, body) = send(
        &app,
        post_form(
            "/artists/create",
            "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll&seeking_venue=y\
             &seeking_description=Looking+for+shows",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Artist Guns N Petals was successfully listed!"));

    let artists = state.store().list_artists().await.unwrap();
    assert_eq!(artists.len(), 1);
    let id = artists[0].id;

    let (_, body) = send(&app, get("/artists")).await;
    assert!(body.contains("Guns N Petals"));

    let (_, body) = send(&app, post_form("/artists/search", "search_term=petal")).await;
    assert!(body.contains(r#"data-count="1""#));

    let response = app
        .clone()
        .oneshot(post_form(
            &format!("/artists/{id}/edit"),
            "name=Guns+N+Roses&city=Los+Angeles&state=CA&genres=Rock",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = state.store().get_artist(id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Guns N Roses");
    assert_eq!(updated.genres, ["Rock"]);
    assert!(!updated.seeking_venue);
    assert_eq!(updated.seeking_description, None);
}

#[tokio::test]
async fn test_show_with_unknown_venue_is_rolled_back() {
    let (state, app) = spawn_app().await;
    let band = state
        .store()
        .create_artist(&artist("Guns N Petals"))
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        post_form(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id=999&start_time=2035-04-01+20%3A00%3A00",
                band.id
            ),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("An error occurred. Show could not be listed."));
    assert_eq!(state.store().count_shows().await.unwrap(), 0);
}

#[tokio::test]
async fn test_show_with_bad_start_time_is_rejected() {
    let (state, app) = spawn_app().await;

    let (status, body) = send(
        &app,
        post_form("/shows/create", "artist_id=1&venue_id=1&start_time=tomorrow"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("alert-danger"));
    assert_eq!(state.store().count_shows().await.unwrap(), 0);
}

#[tokio::test]
async fn test_listing_a_past_show_end_to_end() {
    let (state, app) = spawn_app().await;

    let (status, _) = send(
        &app,
        post_form(
            "/venues/create",
            "name=The+Musical+Hop&city=San+Francisco&state=CA&genres=Jazz",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        post_form(
            "/artists/create",
            "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let venue_id = state.store().list_venue_areas(Utc::now()).await.unwrap()[0].venues[0].id;
    let artist_id = state.store().list_artists().await.unwrap()[0].id;

    let (status, body) = send(
        &app,
        post_form(
            "/shows/create",
            &format!("artist_id={artist_id}&venue_id={venue_id}&start_time=2019-05-21+21%3A30%3A00"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Show was successfully listed!"));

    let (status, body) = send(&app, get("/shows")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(r#"<li class="show">"#).count(), 1);
    assert!(body.contains("Tuesday May, 21, 2019 at 9:30PM"));

    let (_, body) = send(&app, get(&format!("/venues/{venue_id}"))).await;
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("1 Past Shows"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let (_, app) = spawn_app().await;

    let (status, body) = send(&app, get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Metrics not enabled"));
}

#[tokio::test]
async fn test_unmatched_paths_share_one_metrics_series() {
    let (_, app) = spawn_app_with(Some(prometheus_handle())).await;

    for path in ["/wp-admin-3c9e1f", "/.env-3c9e1f", "/venues/1/nope-3c9e1f"] {
        let (status, _) = send(&app, get(path)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    let (status, _) = send(&app, get("/venues/4242")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"path="fallback""#));
    assert!(body.contains(r#"path="/venues/{id}""#));
    assert!(!body.contains("3c9e1f"));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (_, app) = spawn_app().await;

    let response = app.clone().oneshot(get("/")).await.unwrap();
    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let (state, app) = spawn_app().await;
    state
        .store()
        .create_venue(&venue("CAFÉ OTO", "London", "UK"))
        .await
        .unwrap();
    state
        .store()
        .create_artist(&artist("ÉDITH PIAF"))
        .await
        .unwrap();

    for term in ["caf%C3%A9", "CAF%C3%89", "Caf%C3%A9+Oto"] {
        let (status, body) =
            send(&app, post_form("/venues/search", &format!("search_term={term}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"data-count="1""#), "term {term}");
        assert!(body.contains("CAFÉ OTO"));
    }

    let (_, body) = send(&app, post_form("/artists/search", "search_term=%C3%A9dith")).await;
    assert!(body.contains(r#"data-count="1""#));
    assert!(body.contains("ÉDITH PIAF"));
}

#[tokio::test]
async fn test_repeated_genre_keys_are_merged() {
    let (state, app) = spawn_app().await;

    let (status, body) = send(
        &app,
        post_form(
            "/venues/create",
            "name=The+Musical+Hop&city=San+Francisco&state=CA\
             &genres=Jazz&genres=Folk%2C+Swing&genres=jazz",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));

    let id = state.store().list_venue_areas(Utc::now()).await.unwrap()[0].venues[0].id;
    let stored = state.store().get_venue(id).await.unwrap().unwrap();
    assert_eq!(stored.genres, ["Jazz", "Folk", "Swing"]);

    let (status, _) = send(
        &app,
        post_form(
            "/artists/create",
            "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll&genres=Blues",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let artist_id = state.store().list_artists().await.unwrap()[0].id;
    let stored = state.store().get_artist(artist_id).await.unwrap().unwrap();
    assert_eq!(stored.genres, ["Rock n Roll", "Blues"]);
}

#[tokio::test]
async fn test_non_form_body_gets_the_400_page() {
    let (state, app) = spawn_app().await;

    let json = Request::builder()
        .method("POST")
        .uri("/venues/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"The Musical Hop"}"#))
        .unwrap();
    let (status, body) = send(&app, json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("400 Bad Request"));

    let untyped = Request::builder()
        .method("POST")
        .uri("/artists/create")
        .body(Body::from("name=Guns+N+Petals&city=SF&state=CA"))
        .unwrap();
    let (status, body) = send(&app, untyped).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("400 Bad Request"));

    assert_eq!(state.store().count_venues().await.unwrap(), 0);
    assert_eq!(state.store().count_artists().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_failing_inside_transaction_returns_400() {
    let (state, app) = spawn_app().await;
    for table in ["venue_genres", "artist_genres"] {
        state
            .store()
            .conn
            .execute_unprepared(&format!(
                "CREATE TRIGGER reject_{table} BEFORE INSERT ON {table} \
                 BEGIN SELECT RAISE(ABORT, 'genre rejected'); END"
            ))
            .await
            .unwrap();
    }

    let (status, body) = send(
        &app,
        post_form(
            "/venues/create",
            "name=The+Musical+Hop&city=San+Francisco&state=CA&genres=Jazz",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("An error occurred. Venue The Musical Hop could not be listed."));
    assert_eq!(state.store().count_venues().await.unwrap(), 0);

    let (status, body) = send(
        &app,
        post_form(
            "/artists/create",
            "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("An error occurred. Artist Guns N Petals could not be listed."));
    assert_eq!(state.store().count_artists().await.unwrap(), 0);
}
