use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use filmvault::config::{CacheBackend, Config};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = filmvault::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    filmvault::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn director_body() -> Value {
    json!({
        "first_name": "Lana",
        "second_name": "Wachowski",
        "birth_date": "1965-06-21",
        "bio": "Writer and director"
    })
}

fn movie_body(title: &str, imdb_id: &str, director_id: &str) -> Value {
    json!({
        "title": title,
        "description": "A hacker learns the truth",
        "release_date": "1999-03-31",
        "genre": "Action",
        "rating": 8.7,
        "imdb_id": imdb_id,
        "director_id": director_id
    })
}

async fn create_director(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/directors", Some(director_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_system_status() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/system/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["database"], "ok");
    assert_eq!(body["data"]["cache_backend"], "memory");
}

#[tokio::test]
async fn test_empty_listing() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/movies", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["size"], 20);
    assert_eq!(body["data"]["has_next"], false);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_listing_rejects_bad_paging() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/movies?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, "GET", "/api/movies?size=101", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_movie_and_duplicate_imdb() {
    let app = spawn_app().await;
    let director_id = create_director(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/movies",
        Some(movie_body("The Matrix", "tt0133093", &director_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["imdb_id"], "tt0133093");

    let (status, body) = send(
        &app,
        "POST",
        "/api/movies",
        Some(movie_body("Imposter", "tt0133093", &director_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);

    let (_, body) = send(&app, "GET", "/api/movies", None).await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn test_create_movie_with_unknown_director() {
    let app = spawn_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/movies",
        Some(movie_body(
            "Orphan",
            "tt7654321",
            "00000000-0000-4000-8000-000000000000",
        )),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_movie_rejects_malformed_input() {
    let app = spawn_app().await;
    let director_id = create_director(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/movies",
        Some(movie_body("The Matrix", "nm0905154", &director_id)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut body = movie_body("The Matrix", "tt0133093", &director_id);
    body["rating"] = json!(11.0);
    let (status, _) = send(&app, "POST", "/api/movies", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_movie() {
    let app = spawn_app().await;
    let director_id = create_director(&app).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/movies",
        Some(movie_body("The Matrix", "tt0133093", &director_id)),
    )
    .await;
    let movie_id = body["data"]["id"].as_str().unwrap().to_string();

    // Warm the listing cache before mutating.
    let (_, body) = send(&app, "GET", "/api/movies?search_text=matrix", None).await;
    assert_eq!(body["data"]["total"], 1);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/movies/{movie_id}"),
        Some(movie_body("Bound", "tt0115736", &director_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], movie_id.as_str());
    assert_eq!(body["data"]["title"], "Bound");

    let (_, body) = send(&app, "GET", "/api/movies?search_text=matrix", None).await;
    assert_eq!(body["data"]["total"], 0);

    let (status, _) = send(&app, "DELETE", &format!("/api/movies/{movie_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", &format!("/api/movies/{movie_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_director_delete_flow() {
    let app = spawn_app().await;
    let director_id = create_director(&app).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/movies",
        Some(movie_body("A", "tt1234567", &director_id)),
    )
    .await;
    let movie_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/directors/{director_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Cannot delete director with existing movies");

    let (status, _) = send(&app, "DELETE", &format!("/api/movies/{movie_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/directors/{director_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/directors/{director_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_rejects_unaddressable_page() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/movies?page=18446744073709551615", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = send(
        &app,
        "GET",
        "/api/movies?page=184467440737095516&size=100",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The process is still serving.
    let (status, _) = send(&app, "GET", "/api/movies", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_status_reports_fallback_cache_backend() {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.cache.backend = CacheBackend::Redis;
    config.cache.redis_url = "redis://127.0.0.1:1".to_string();
    config.cache.operation_timeout_ms = 200;

    let state = filmvault::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    let app = filmvault::api::router(state);

    let (status, body) = send(&app, "GET", "/api/system/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cache_backend"], "memory");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/movies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_metrics_unavailable_without_recorder() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
