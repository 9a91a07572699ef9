use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Outcomes of the booking engine other than success.
///
/// `SeatConflict` is an expected result under contention, not a crash: the
/// caller should re-read availability and let the user pick again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("At least one seat must be selected")]
    EmptySelection,

    #[error("Invalid seat id {0}")]
    InvalidSeatId(i32),

    #[error("Showtime {0} not found")]
    ShowtimeNotFound(i32),

    #[error("Seats {0:?} do not belong to this showtime's screen")]
    SeatNotOnScreen(Vec<i32>),

    #[error("Seats {0:?} are already booked for this showtime")]
    SeatConflict(Vec<i32>),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Booking transaction failed: {0}")]
    TransactionFailure(String),
}

impl From<DbErr> for BookingError {
    fn from(err: DbErr) -> Self {
        BookingError::TransactionFailure(err.to_string())
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
            AppError::Booking(err) => match err {
                BookingError::EmptySelection => (StatusCode::BAD_REQUEST, "EMPTY_SELECTION"),
                BookingError::InvalidSeatId(_) => (StatusCode::BAD_REQUEST, "INVALID_SEAT_ID"),
                BookingError::ShowtimeNotFound(_) => (StatusCode::NOT_FOUND, "SHOWTIME_NOT_FOUND"),
                BookingError::SeatNotOnScreen(_) => (StatusCode::BAD_REQUEST, "SEAT_NOT_ON_SCREEN"),
                BookingError::SeatConflict(_) => (StatusCode::CONFLICT, "SEAT_CONFLICT"),
                BookingError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
                BookingError::TransactionFailure(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "TRANSACTION_FAILURE")
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = match &self {
            AppError::Internal(msg)
            | AppError::Booking(BookingError::TransactionFailure(msg)) => {
                tracing::error!(error = %msg, "Request failed with internal error");
                json!({ "error": "Internal server error", "code": code })
            }
            AppError::Booking(BookingError::SeatConflict(seats)) => json!({
                "error": self.to_string(),
                "code": code,
                "conflicting_seat_ids": seats,
            }),
            AppError::Booking(BookingError::SeatNotOnScreen(seats)) => json!({
                "error": self.to_string(),
                "code": code,
                "seat_ids": seats,
            }),
            _ => json!({ "error": self.to_string(), "code": code }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_conflict_maps_to_409() {
        let err = AppError::from(BookingError::SeatConflict(vec![2]));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_errors_map_to_400() {
        for err in [
            BookingError::EmptySelection,
            BookingError::InvalidSeatId(0),
            BookingError::SeatNotOnScreen(vec![9]),
        ] {
            let status = AppError::from(err).into_response().status();
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn missing_showtime_maps_to_404() {
        let err = AppError::from(BookingError::ShowtimeNotFound(7));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn transaction_failure_hides_details() {
        let err = AppError::from(BookingError::TransactionFailure("connection reset".into()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn db_errors_become_transaction_failures() {
        let err = BookingError::from(DbErr::Custom("boom".into()));
        assert!(matches!(err, BookingError::TransactionFailure(msg) if msg.contains("boom")));
    }
}
