use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Data source error: {0}")]
    DataSource(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DataSource(_) | AppError::Csv(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Reasons a single rating record could not be accepted
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid user id {0:?}")]
    InvalidUser(String),

    #[error("invalid item id {0:?}")]
    InvalidItem(String),

    #[error("invalid rating {0:?}")]
    InvalidRating(String),

    #[error("rating must be finite, got {0}")]
    NonFiniteRating(f64),

    #[error("unreadable record: {0}")]
    Unreadable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response = AppError::InvalidInput("top_n must be >= 0".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("user 42".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_io_error_maps_to_500() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::Other, "disk gone").into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_record_error_messages() {
        assert_eq!(RecordError::FieldCount(2).to_string(), "expected 3 fields, found 2");
        assert_eq!(
            RecordError::InvalidRating("abc".to_string()).to_string(),
            "invalid rating \"abc\""
        );
    }
}
