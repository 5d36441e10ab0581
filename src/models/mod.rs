use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod rating_store;

pub use rating_store::RatingStore;

/// Identifier of a user in the rating table
pub type UserId = i64;

/// Identifier of a rated item
pub type ItemId = i64;

/// A single (user, item, rating) observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user: UserId,
    pub item: ItemId,
    pub rating: f64,
}

impl Rating {
    pub fn new(user: UserId, item: ItemId, rating: f64) -> Self {
        Self { user, item, rating }
    }
}

/// An unseen item and its accumulated similarity-weighted score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub item: ItemId,
    pub score: f64,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Recommended item: {} with score: {:.2}", self.item, self.score)
    }
}

/// Response returned to API clients for a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub user: UserId,
    pub recommendations: Vec<Recommendation>,
    /// Human-readable note, only set when nothing could be recommended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationResponse {
    pub fn new(user: UserId, recommendations: Vec<Recommendation>) -> Self {
        let message = recommendations
            .is_empty()
            .then(|| format!("No recommendations available for user {}", user));

        Self {
            user,
            recommendations,
            message,
        }
    }
}

/// One rating of a user's vector, as listed by the API
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemRating {
    pub item: ItemId,
    pub rating: f64,
}
