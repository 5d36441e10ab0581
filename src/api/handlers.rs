use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{ItemRating, Rating, RecommendationResponse, UserId},
    services::Recommender,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Signed so that negative values reach validation instead of failing deserialization
    pub top_n: Option<i64>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List every user with at least one rating
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserId>> {
    let store = state.store.read().await;
    let mut users: Vec<UserId> = store.all_users().collect();
    users.sort_unstable();
    Json(users)
}

/// Get one user's rating vector, ordered by item
pub async fn get_user_ratings(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<ItemRating>>> {
    let store = state.store.read().await;
    let ratings = store
        .ratings_of(user_id)
        .ok_or_else(|| AppError::NotFound(format!("No ratings recorded for user {}", user_id)))?;

    let mut items: Vec<ItemRating> = ratings
        .iter()
        .map(|(&item, &rating)| ItemRating { item, rating })
        .collect();
    items.sort_unstable_by_key(|r| r.item);

    Ok(Json(items))
}

/// Record a rating, replacing any earlier rating of the same item by the same user
pub async fn add_rating(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(rating): Json<Rating>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    if !rating.rating.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "rating must be a finite number, got {}",
            rating.rating
        )));
    }

    state
        .store
        .write()
        .await
        .put(rating.user, rating.item, rating.rating);

    tracing::info!(
        request_id = %request_id,
        user = rating.user,
        item = rating.item,
        rating = rating.rating,
        "Rating recorded"
    );

    Ok((StatusCode::CREATED, Json(rating)))
}

/// Recommend unseen items for a user
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<UserId>,
    Query(query): Query<RecommendQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let top_n = match query.top_n {
        None => state.default_top_n,
        Some(n) => usize::try_from(n).map_err(|_| {
            AppError::InvalidInput(format!("top_n must be zero or greater, got {}", n))
        })?,
    };

    tracing::info!(
        request_id = %request_id,
        user = user_id,
        top_n,
        "Processing recommendation request"
    );

    let recommendations = {
        let store = state.store.read().await;
        Recommender::new(&store).recommend(user_id, top_n)
    };

    for rec in &recommendations {
        tracing::debug!(request_id = %request_id, user = user_id, "{}", rec);
    }

    tracing::info!(
        request_id = %request_id,
        returned = recommendations.len(),
        "Recommendations computed"
    );

    Ok(Json(RecommendationResponse::new(user_id, recommendations)))
}
