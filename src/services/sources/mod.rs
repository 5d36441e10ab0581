//! Rating data sources
//!
//! A source turns some external representation of ratings (a delimited text file
//! today) into well-typed [`Rating`] observations. Records that cannot be parsed are
//! skipped and reported back as [`RecordWarning`]s so that one bad line never
//! prevents the rest of the data from loading.

use serde::Serialize;

use crate::{
    error::AppResult,
    models::{Rating, RatingStore},
};

pub mod csv_file;
pub mod sample_data;

pub use csv_file::CsvRatingSource;
pub use sample_data::{sample_ratings, seed_sample_data};

/// A record that was rejected while loading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordWarning {
    /// 1-based line number in the source, when known
    pub line: Option<u64>,
    /// Raw record text as read
    pub record: String,
    pub reason: String,
}

/// Everything a source produced in one load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRatings {
    /// Accepted ratings, in source order
    pub ratings: Vec<Rating>,
    pub warnings: Vec<RecordWarning>,
}

/// Summary of a load into a store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub ratings_loaded: usize,
    pub users: usize,
    pub warnings: Vec<RecordWarning>,
}

/// Trait for rating data sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RatingSource: Send + Sync {
    /// Read every rating the source holds
    ///
    /// Only failures that prevent reading the source at all are errors; bad
    /// individual records come back as warnings.
    async fn load(&self) -> AppResult<LoadedRatings>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Loads all ratings from `source` into `store`
///
/// Ratings are applied in source order, so a repeated (user, item) pair keeps the
/// last value read.
pub async fn load_into(source: &dyn RatingSource, store: &mut RatingStore) -> AppResult<LoadReport> {
    let LoadedRatings { ratings, warnings } = source.load().await?;

    for warning in &warnings {
        tracing::warn!(
            source = source.name(),
            line = ?warning.line,
            record = %warning.record,
            reason = %warning.reason,
            "Skipped malformed rating record"
        );
    }

    let ratings_loaded = ratings.len();
    store.extend(ratings);

    tracing::info!(
        source = source.name(),
        ratings_loaded,
        users = store.user_count(),
        skipped = warnings.len(),
        "Ratings loaded"
    );

    Ok(LoadReport {
        ratings_loaded,
        users: store.user_count(),
        warnings,
    })
}
