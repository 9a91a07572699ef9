use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::booking::{BookingConfirmation, UserBooking};
use crate::error::AppResult;
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub showtime_id: i32,
    #[serde(default)]
    pub seat_ids: Vec<i32>,
}

/// Book the selected seats for a showtime
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingConfirmation>)> {
    let confirmation = state
        .bookings
        .submit_booking(&claims, payload.showtime_id, payload.seat_ids)
        .await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// List the current user's bookings
pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<UserBooking>>> {
    let bookings = state.bookings.list_user_bookings(claims.sub).await?;
    Ok(Json(bookings))
}
