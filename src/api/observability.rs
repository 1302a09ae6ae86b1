use crate::api::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Response {
    match state.prometheus_handle.as_ref() {
        Some(handle) => (
            [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Metrics are disabled (observability.metrics_enabled = false)",
        )
            .into_response(),
    }
}

/// Catalog resource a matched route belongs to. Unmatched requests map to `other`.
fn resource_of(route: Option<&str>) -> &'static str {
    let Some(route) = route else {
        return "other";
    };

    match route.trim_start_matches("/api/").split('/').next() {
        Some("movies") => "movies",
        Some("directors") => "directors",
        Some("system") => "system",
        Some("metrics") => "metrics",
        _ => "other",
    }
}

const fn status_class(status: u16) -> &'static str {
    match status {
        500.. => "5xx",
        400..=499 => "4xx",
        300..=399 => "3xx",
        _ => "2xx",
    }
}

/// Per-request span and catalog request metrics.
///
/// The request id is echoed in the `x-request-id` response header.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let resource = resource_of(route.as_deref());
    let search = req
        .uri()
        .query()
        .is_some_and(|q| q.contains("search_text="));

    let span = info_span!(
        "catalog_request",
        request_id = %request_id,
        method = %method,
        resource,
        route = route.as_deref().unwrap_or("unmatched"),
        search,
    );

    async move {
        let mut response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status().as_u16();
        let class = status_class(status);

        metrics::counter!(
            "catalog_http_requests_total",
            "method" => method.clone(),
            "resource" => resource,
            "status_class" => class,
        )
        .increment(1);
        metrics::histogram!(
            "catalog_http_request_duration_seconds",
            "method" => method,
            "resource" => resource,
        )
        .record(elapsed.as_secs_f64());

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert("x-request-id", value);
        }

        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if status >= 500 {
            warn!(status_code = status, duration_ms, "Catalog request failed");
        } else {
            info!(
                status_code = status,
                status_class = class,
                duration_ms,
                "Catalog request finished"
            );
        }

        response
    }
    .instrument(span)
    .await
}
