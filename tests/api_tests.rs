use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use ratings_recommender::{
    api::{create_router, AppState},
    models::{RatingStore, RecommendationResponse},
    services::sources::sample_ratings,
};

fn create_test_server() -> TestServer {
    let store: RatingStore = sample_ratings().into_iter().collect();
    let app = create_router(AppState::new(store, 5));
    TestServer::new(app).unwrap()
}

fn create_empty_server() -> TestServer {
    TestServer::new(create_router(AppState::default())).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_users() {
    let server = create_test_server();
    let response = server.get("/api/v1/users").await;
    response.assert_status_ok();
    let users: Vec<i64> = response.json();
    assert_eq!(users, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_get_user_ratings() {
    let server = create_test_server();
    let response = server.get("/api/v1/users/3/ratings").await;
    response.assert_status_ok();
    let ratings: Vec<Value> = response.json();
    let items: Vec<i64> = ratings.iter().map(|r| r["item"].as_i64().unwrap()).collect();
    assert_eq!(items, vec![101, 104, 105, 107]);
    assert_eq!(ratings[2]["rating"], 4.5);
}

#[tokio::test]
async fn test_get_unknown_user_ratings_is_404() {
    let server = create_test_server();
    let response = server.get("/api/v1/users/99/ratings").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_recommend_sample_user() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/users/3/recommendations")
        .add_query_param("top_n", 2)
        .await;
    response.assert_status_ok();

    let body: RecommendationResponse = response.json();
    assert_eq!(body.user, 3);
    assert!(body.message.is_none());
    assert_eq!(body.recommendations.len(), 2);
    for rec in &body.recommendations {
        assert!(rec.item == 102 || rec.item == 103);
        assert_eq!(rec.score, 0.0);
    }
}

#[tokio::test]
async fn test_recommend_uses_default_top_n() {
    let server = create_test_server();
    let response = server.get("/api/v1/users/1/recommendations").await;
    response.assert_status_ok();

    // default of 5 exceeds the three items user 1 has not rated
    let body: RecommendationResponse = response.json();
    assert_eq!(body.recommendations.len(), 3);
    for pair in body.recommendations.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[tokio::test]
async fn test_recommend_zero_top_n_is_empty_with_message() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/users/1/recommendations")
        .add_query_param("top_n", 0)
        .await;
    response.assert_status_ok();

    let body: RecommendationResponse = response.json();
    assert!(body.recommendations.is_empty());
    assert_eq!(
        body.message.as_deref(),
        Some("No recommendations available for user 1")
    );
}

#[tokio::test]
async fn test_recommend_unknown_user_is_empty_not_error() {
    let server = create_test_server();
    let response = server.get("/api/v1/users/42/recommendations").await;
    response.assert_status_ok();

    let body: RecommendationResponse = response.json();
    assert!(body.recommendations.is_empty());
    assert!(body.message.is_some());
}

#[tokio::test]
async fn test_recommend_negative_top_n_rejected() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/users/1/recommendations")
        .add_query_param("top_n", -1)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("top_n"));
}

#[tokio::test]
async fn test_add_rating_then_recommend() {
    let server = create_empty_server();

    for (user, item, rating) in [
        (1, 1, 1.0),
        (1, 2, 2.0),
        (1, 3, 3.0),
        (2, 1, 2.0),
        (2, 2, 4.0),
        (2, 3, 6.0),
        (2, 9, 4.0),
    ] {
        let response = server
            .post("/api/v1/ratings")
            .json(&json!({ "user": user, "item": item, "rating": rating }))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    let response = server
        .get("/api/v1/users/1/recommendations")
        .add_query_param("top_n", 10)
        .await;
    let body: RecommendationResponse = response.json();
    assert_eq!(body.recommendations.len(), 1);
    assert_eq!(body.recommendations[0].item, 9);
    assert!((body.recommendations[0].score - 4.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_add_rating_overwrites() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/ratings")
        .json(&json!({ "user": 1, "item": 101, "rating": 1.0 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["rating"], 1.0);

    let ratings: Vec<Value> = server.get("/api/v1/users/1/ratings").await.json();
    assert_eq!(ratings.len(), 3);
    assert_eq!(ratings[0]["item"], 101);
    assert_eq!(ratings[0]["rating"], 1.0);
}

#[tokio::test]
async fn test_request_id_generated_and_echoed() {
    let server = create_test_server();

    let response = server.get("/health").await;
    let generated = response.header("x-request-id");
    assert!(!generated.is_empty());

    let response = server
        .get("/api/v1/users")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("client-trace-7"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "client-trace-7");
}
