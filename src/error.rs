use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tracing::error;

use crate::repository::RepositoryError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::ClassConflict { date } => {
                ApiError::Conflict(format!("Class already exists on {date}"))
            }
            RepositoryError::NoClassOnDate { .. } => {
                ApiError::BadRequest("We don't have a class on this day".into())
            }
            RepositoryError::DuplicateBooking { .. } => {
                ApiError::Conflict("You have already enrolled into class".into())
            }
            RepositoryError::StorageFault(err) => {
                error!("storage fault: {err}");
                ApiError::Internal("Failed to access storage".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_repository_error_status() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let cases = [
            (
                RepositoryError::ClassConflict { date },
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::NoClassOnDate { date },
                StatusCode::BAD_REQUEST,
            ),
            (
                RepositoryError::DuplicateBooking {
                    date,
                    name: "Alice".into(),
                },
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::StorageFault("disk gone".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_class_conflict_names_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let ApiError::Conflict(msg) = ApiError::from(RepositoryError::ClassConflict { date }) else {
            panic!("expected conflict");
        };
        assert_eq!(msg, "Class already exists on 2024-01-02");
    }
}
