use std::collections::HashMap;

use super::{ItemId, Rating, UserId};

/// In-memory table of every known rating, keyed by user then item
///
/// Each (user, item) pair holds at most one rating; a later `put` for the same
/// pair replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingStore {
    ratings: HashMap<UserId, HashMap<ItemId, f64>>,
}

impl RatingStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the rating for (user, item)
    pub fn put(&mut self, user: UserId, item: ItemId, rating: f64) {
        self.ratings.entry(user).or_default().insert(item, rating);
    }

    /// Returns the complete rating vector of a user, or `None` if the user was never recorded
    pub fn ratings_of(&self, user: UserId) -> Option<&HashMap<ItemId, f64>> {
        self.ratings.get(&user)
    }

    /// Every user present, in no particular order
    pub fn all_users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.ratings.keys().copied()
    }

    /// Number of distinct users with at least one rating
    pub fn user_count(&self) -> usize {
        self.ratings.len()
    }

    /// Total number of stored (user, item) ratings
    pub fn rating_count(&self) -> usize {
        self.ratings.values().map(HashMap::len).sum()
    }

    /// True until the first `put`
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl Extend<Rating> for RatingStore {
    fn extend<T: IntoIterator<Item = Rating>>(&mut self, iter: T) {
        for rating in iter {
            self.put(rating.user, rating.item, rating.rating);
        }
    }
}

impl FromIterator<Rating> for RatingStore {
    fn from_iter<T: IntoIterator<Item = Rating>>(iter: T) -> Self {
        let mut store = RatingStore::new();
        store.extend(iter);
        store
    }
}
