use sea_orm::ConnectionTrait;
use serde::Serialize;

use super::conflict::booked_seat_ids;
use crate::catalog::{self, ShowtimeDetails};
use crate::error::{BookingError, BookingResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatAvailability {
    pub seat_id: i32,
    pub seat_number: i32,
    pub seat_type: String,
    pub is_booked: bool,
}

/// A showtime together with the booking state of every seat on its screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatMap {
    pub showtime: ShowtimeDetails,
    pub seats: Vec<SeatAvailability>,
}

/// Seats of the showtime's screen, ordered by seat number, each marked
/// booked iff it is claimed for this showtime.
pub async fn get_availability<C: ConnectionTrait>(
    db: &C,
    showtime_id: i32,
) -> BookingResult<Vec<SeatAvailability>> {
    Ok(get_seat_map(db, showtime_id).await?.seats)
}

pub async fn get_seat_map<C: ConnectionTrait>(db: &C, showtime_id: i32) -> BookingResult<SeatMap> {
    let showtime = catalog::get_showtime(db, showtime_id)
        .await?
        .ok_or(BookingError::ShowtimeNotFound(showtime_id))?;

    let seats = catalog::list_seats(db, showtime.screen_id).await?;
    // Scoped to the showtime, not the screen: the same seat is free again
    // for the next screening.
    let booked = booked_seat_ids(db, showtime.id).await?;

    let seats = seats
        .into_iter()
        .map(|s| SeatAvailability {
            is_booked: booked.contains(&s.id),
            seat_id: s.id,
            seat_number: s.seat_number,
            seat_type: s.seat_type,
        })
        .collect();

    Ok(SeatMap { showtime, seats })
}
