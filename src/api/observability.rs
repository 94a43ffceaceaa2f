use crate::api::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Route label for requests that matched no route, so unknown paths share a
/// single metrics series.
const FALLBACK_ROUTE: &str = "fallback";

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or_else(|| FALLBACK_ROUTE.to_string(), |path| path.as_str().to_string())
}

/// Wraps every request in a span carrying a request id and the matched route,
/// records the request metrics, and echoes the id back in `x-request-id`.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let route = route_label(&req);

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        route = %route,
        path = %req.uri().path(),
    );

    async move {
        let mut response = next.run(req).await;
        let status = response.status();
        let elapsed = start.elapsed();

        let labels = [
            ("method", method.to_string()),
            ("path", route),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if status.is_server_error() {
            warn!(status = status.as_u16(), duration_ms, "Request failed");
        } else if status == StatusCode::NOT_FOUND {
            info!(status = status.as_u16(), duration_ms, "No page for request");
        } else {
            info!(status = status.as_u16(), duration_ms, "Request finished");
        }

        response
    }
    .instrument(span)
    .await
}
