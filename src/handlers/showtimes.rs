use axum::{
    extract::{Path, State},
    Json,
};

use crate::booking::SeatMap;
use crate::catalog::ShowtimeDetails;
use crate::error::AppResult;
use crate::AppState;

/// List showtimes with movie, theater and screen, soonest first
pub async fn list_showtimes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ShowtimeDetails>>> {
    let showtimes = state.bookings.list_showtimes().await?;
    Ok(Json(showtimes))
}

/// Seat map for a showtime with booked seats marked
pub async fn view_seats(
    State(state): State<AppState>,
    Path(showtime_id): Path<i32>,
) -> AppResult<Json<SeatMap>> {
    let seat_map = state.bookings.view_seats(showtime_id).await?;
    Ok(Json(seat_map))
}
