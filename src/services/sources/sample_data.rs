use std::path::Path;

use csv::WriterBuilder;

use crate::{
    error::{AppError, AppResult},
    models::Rating,
};

const SAMPLE: [(i64, i64, f64); 11] = [
    (1, 101, 5.0),
    (1, 102, 3.0),
    (1, 103, 2.5),
    (2, 101, 2.0),
    (2, 102, 2.5),
    (2, 103, 5.0),
    (2, 104, 2.0),
    (3, 101, 2.5),
    (3, 104, 4.0),
    (3, 105, 4.5),
    (3, 107, 5.0),
];

/// The small three-user data set written when no ratings file exists
pub fn sample_ratings() -> Vec<Rating> {
    SAMPLE
        .iter()
        .map(|&(user, item, rating)| Rating::new(user, item, rating))
        .collect()
}

/// Writes the sample data set to `path` unless a file is already there
///
/// Returns `true` if the file was created.
pub async fn seed_sample_data(path: &Path, delimiter: u8) -> AppResult<bool> {
    if tokio::fs::try_exists(path).await? {
        return Ok(false);
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for rating in sample_ratings() {
        writer.write_record([
            rating.user.to_string(),
            rating.item.to_string(),
            format!("{:.1}", rating.rating),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to encode sample data: {}", e)))?;
    tokio::fs::write(path, data).await?;

    tracing::info!(
        path = %path.display(),
        records = SAMPLE.len(),
        "Seeded sample ratings file"
    );

    Ok(true)
}
