#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use moviebff_api::tmdb::TmdbClient;
use moviebff_server::router::build_router;
use moviebff_server::state::AppState;
use tower::ServiceExt;
use wiremock::matchers::{header as header_matcher, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-read-token";
const CONFIGURATION_JSON: &str = include_str!("../../../fixtures/tmdb/configuration.json");
const SEARCH_JSON: &str = include_str!("../../../fixtures/tmdb/search_movie_batman.json");
const SEARCH_EMPTY_JSON: &str = include_str!("../../../fixtures/tmdb/search_movie_empty.json");
const DETAILS_JSON: &str = include_str!("../../../fixtures/tmdb/movie_details_155.json");

fn app(server: &MockServer) -> Router {
    let client = TmdbClient::builder()
        .base_url(format!("{}/3/", server.uri()).parse().unwrap())
        .api_token(TOKEN)
        .user_agent("moviebff-test/0.0.0")
        .build()
        .unwrap();
    build_router(AppState::new(client))
}

async fn mount_configuration(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/3/configuration"))
        .and(header_matcher("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(CONFIGURATION_JSON))
        .mount(server)
        .await;
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| String::from(v.to_str().unwrap()));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, cache_control, body)
}

#[tokio::test]
async fn test_config_endpoint() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;

    // Act
    let (status, cache_control, body) = get(app(&server), "/config").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=86400"));
    assert_eq!(body["images"]["base_url"], "https://image.tmdb.org/t/p/");
    assert!(
        body["images"]["poster_sizes"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("w500"))
    );
    assert!(body["images"].get("still_sizes").is_none());
}

#[tokio::test]
async fn test_search_endpoint_trims_query() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "batman"))
        .and(query_param("page", "1"))
        .and(header_matcher("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
        .expect(1)
        .mount(&server)
        .await;

    // Act
    let (status, cache_control, body) = get(app(&server), "/movies/search?q=%20batman%20").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=60"));
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 12);
    assert_eq!(body["total_results"], 227);
    assert_eq!(body["results"][0]["id"], 268);
    assert_eq!(
        body["results"][0]["poster_url"],
        "https://image.tmdb.org/t/p/w500/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg"
    );
    assert_eq!(body["results"][2]["poster_url"], "");
    assert_eq!(body["results"][2]["release_date"], "");
}

#[tokio::test]
async fn test_search_endpoint_passes_page() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "dark knight"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
        .expect(1)
        .mount(&server)
        .await;

    // Act
    let (status, _, _) = get(app(&server), "/movies/search?q=dark+knight&page=3").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_search_repeated_query_uses_first_value() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
        .expect(1)
        .mount(&server)
        .await;

    // Act
    let (status, _, body) = get(app(&server), "/movies/search?q=batman&q=a").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["title"], "Batman");
}

#[tokio::test]
async fn test_search_endpoint_no_results() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_EMPTY_JSON))
        .mount(&server)
        .await;

    // Act
    let (status, _, body) = get(app(&server), "/movies/search?q=zzzzzzzz").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_results"], 0);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_validation_errors() {
    let cases = [
        ("/movies/search", "Query parameter 'q' is required"),
        ("/movies/search?q=%20%20", "Query parameter 'q' is required"),
        ("/movies/search?q=a", "Query must be at least 2 characters long"),
        (
            "/movies/search?q=batman&page=0",
            "Page must be a positive integer",
        ),
        (
            "/movies/search?q=batman&page=abc",
            "Page must be a positive integer",
        ),
    ];

    for (uri, message) in cases {
        // Arrange
        let server = MockServer::start().await;

        // Act
        let (status, cache_control, body) = get(app(&server), uri).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri={uri}");
        assert!(cache_control.is_none(), "uri={uri}");
        assert_eq!(body["error"], "Validation error", "uri={uri}");
        assert_eq!(body["message"], message, "uri={uri}");
        assert!(
            server.received_requests().await.unwrap().is_empty(),
            "uri={uri}"
        );
    }
}

#[tokio::test]
async fn test_search_rate_limited() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    // Act
    let (status, cache_control, body) = get(app(&server), "/movies/search?q=batman").await;

    // Assert
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(cache_control.is_none());
    assert_eq!(body["error"], "Rate limit exceeded");
    assert_eq!(
        body["message"],
        "TMDB API rate limit exceeded. Please try again later."
    );
}

#[tokio::test]
async fn test_details_endpoint() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/movie/155"))
        .and(query_param("append_to_response", "videos,credits"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAILS_JSON))
        .expect(1)
        .mount(&server)
        .await;

    // Act
    let (status, cache_control, body) = get(app(&server), "/movies/155").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=60"));
    assert_eq!(body["id"], 155);
    assert_eq!(body["title"], "The Dark Knight");
    assert_eq!(body["runtime"], 152);
    assert_eq!(
        body["backdrop_url"],
        "https://image.tmdb.org/t/p/w1280/nMKdUUepR0i5zn0y1T4CsSB5chy.jpg"
    );
    assert_eq!(body["genres"].as_array().unwrap().len(), 4);
    assert_eq!(body["cast"].as_array().unwrap().len(), 5);
    assert_eq!(body["cast"][1]["name"], "Heath Ledger");
    assert_eq!(body["trailers"].as_array().unwrap().len(), 2);
    assert_eq!(body["trailers"][0]["type"], "Trailer");
    assert!(body.get("budget").is_none());
}

#[tokio::test]
async fn test_details_invalid_id() {
    // Arrange
    let server = MockServer::start().await;

    // Act
    let (status, _, body) = get(app(&server), "/movies/abc").await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
    assert_eq!(
        body["message"],
        "Invalid movie ID. Must be a positive integer."
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_details_undecodable_id_is_json_validation_error() {
    // Arrange
    let server = MockServer::start().await;

    // Act
    let (status, _, body) = get(app(&server), "/movies/%FF").await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
    assert_eq!(
        body["message"],
        "Invalid movie ID. Must be a positive integer."
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_details_not_found() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"success":false,"status_code":34,"status_message":"The resource you requested could not be found."}"#,
        ))
        .mount(&server)
        .await;

    // Act
    let (status, _, body) = get(app(&server), "/movies/999999").await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["message"], "Movie with ID 999999 not found.");
}

#[tokio::test]
async fn test_configuration_failure_wins_over_details() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/configuration"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/movie/155"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAILS_JSON))
        .mount(&server)
        .await;

    // Act
    let (status, _, body) = get(app(&server), "/movies/155").await;

    // Assert
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Rate limit exceeded");
}

#[tokio::test]
async fn test_upstream_status_passes_through() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/configuration"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"status_message":"Invalid API key"}"#),
        )
        .mount(&server)
        .await;

    // Act
    let (status, cache_control, body) = get(app(&server), "/config").await;

    // Assert
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(cache_control.is_none());
    assert_eq!(body["error"], "TMDB API error");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("TMDB API error: ")
    );
}

#[tokio::test]
async fn test_malformed_upstream_json_is_internal_error() {
    // Arrange
    let server = MockServer::start().await;
    mount_configuration(&server).await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    // Act
    let (status, _, body) = get(app(&server), "/movies/search?q=batman").await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], "Failed to search movies");
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    // Arrange
    let server = MockServer::start().await;
    let app = app(&server);
    drop(server);

    // Act
    let (status, _, body) = get(app, "/config").await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch configuration");
}

#[tokio::test]
async fn test_health_endpoint() {
    // Arrange
    let server = MockServer::start().await;

    // Act
    let (status, _, body) = get(app(&server), "/health").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_unknown_route() {
    // Arrange
    let server = MockServer::start().await;

    // Act
    let (status, _, body) = get(app(&server), "/tv/1399").await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["message"], "No route for /tv/1399");
}
