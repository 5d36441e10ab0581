use std::path::PathBuf;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};

use crate::{
    error::{AppResult, RecordError},
    models::Rating,
    services::sources::{LoadedRatings, RatingSource, RecordWarning},
};

/// Ratings stored as delimited text, one `user<d>item<d>rating` record per line, no header
#[derive(Debug, Clone)]
pub struct CsvRatingSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvRatingSource {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }

    /// Parses delimited rating records from an in-memory buffer
    ///
    /// Quote characters have no special meaning: every line is its own record.
    pub fn parse(&self, data: &[u8]) -> LoadedRatings {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .from_reader(data);

        let mut loaded = LoadedRatings::default();

        for result in reader.byte_records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    loaded.warnings.push(RecordWarning {
                        line: e.position().map(|p| p.line()),
                        record: String::new(),
                        reason: RecordError::Unreadable(e.to_string()).to_string(),
                    });
                    continue;
                }
            };

            let line = record.position().map(|p| p.line());
            let text = self.join(&record);

            let parsed = StringRecord::from_byte_record(record)
                .map_err(|e| RecordError::Unreadable(e.utf8_error().to_string()))
                .and_then(|record| parse_record(&record));

            match parsed {
                Ok(rating) => loaded.ratings.push(rating),
                Err(reason) => loaded.warnings.push(RecordWarning {
                    line,
                    record: text,
                    reason: reason.to_string(),
                }),
            }
        }

        loaded
    }

    /// Raw record text, with invalid UTF-8 replaced
    fn join(&self, record: &ByteRecord) -> String {
        record
            .iter()
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(char::from(self.delimiter).to_string().as_str())
    }
}

fn parse_record(record: &StringRecord) -> Result<Rating, RecordError> {
    if record.len() != 3 {
        return Err(RecordError::FieldCount(record.len()));
    }

    let user = record[0]
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidUser(record[0].to_string()))?;
    let item = record[1]
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidItem(record[1].to_string()))?;
    let rating = record[2]
        .parse::<f64>()
        .map_err(|_| RecordError::InvalidRating(record[2].to_string()))?;

    if !rating.is_finite() {
        return Err(RecordError::NonFiniteRating(rating));
    }

    Ok(Rating::new(user, item, rating))
}

#[async_trait::async_trait]
impl RatingSource for CsvRatingSource {
    async fn load(&self) -> AppResult<LoadedRatings> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(self.parse(&data))
    }

    fn name(&self) -> &'static str {
        "csv_file"
    }
}
