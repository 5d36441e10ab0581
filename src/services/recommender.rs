use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{ItemId, RatingStore, Recommendation, UserId};
use crate::services::similarity::pearson;

/// User-based collaborative filtering over a borrowed rating table
///
/// The recommender holds no state of its own: every call to [`Recommender::recommend`]
/// is computed from scratch against the store it was built with.
pub struct Recommender<'a> {
    store: &'a RatingStore,
}

impl<'a> Recommender<'a> {
    /// Creates a recommender reading from the given store
    pub fn new(store: &'a RatingStore) -> Self {
        Self { store }
    }

    /// Ranks the items `target` has not rated by similarity-weighted score
    ///
    /// Every other user contributes `similarity * rating` to each item they rated
    /// that the target has not. Contributions are summed without normalization, so
    /// negatively correlated neighbors push scores down and may leave them below zero.
    ///
    /// Results are sorted by descending score; equal scores fall back to ascending
    /// item id. An unknown target or `top_n == 0` yields an empty list.
    pub fn recommend(&self, target: UserId, top_n: usize) -> Vec<Recommendation> {
        if top_n == 0 {
            return Vec::new();
        }

        let Some(target_ratings) = self.store.ratings_of(target) else {
            tracing::debug!(user = target, "No ratings recorded for user");
            return Vec::new();
        };

        let mut scores: HashMap<ItemId, f64> = HashMap::new();
        let mut neighbors = 0usize;

        for other in self.store.all_users().filter(|&u| u != target) {
            let Some(other_ratings) = self.store.ratings_of(other) else {
                continue;
            };
            neighbors += 1;

            let similarity = pearson(target_ratings, other_ratings);

            for (&item, &rating) in other_ratings {
                if !target_ratings.contains_key(&item) {
                    *scores.entry(item).or_insert(0.0) += similarity * rating;
                }
            }
        }

        let candidates = scores.len();
        let ranked = rank(scores, top_n);

        tracing::debug!(
            user = target,
            neighbors,
            candidates,
            returned = ranked.len(),
            "Computed recommendations"
        );

        ranked
    }
}

/// Sorts accumulated scores (descending, then by item id) and keeps the first `top_n`
fn rank(scores: HashMap<ItemId, f64>, top_n: usize) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = scores
        .into_iter()
        .map(|(item, score)| Recommendation { item, score })
        .collect();

    ranked.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.item.cmp(&b.item),
        ordering => ordering,
    });
    ranked.truncate(top_n);
    ranked
}
