use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

use super::availability::{self, SeatAvailability, SeatMap};
use super::pricing::PricingPolicy;
use super::selection::SeatSelection;
use super::transaction::{self, BookingConfirmation};
use crate::catalog::{self, ShowtimeDetails};
use crate::entities::{booked_seat, booking};
use crate::error::{BookingError, BookingResult};

/// Source of the authenticated user for a booking call.
pub trait AuthContext {
    fn current_user_id(&self) -> Option<Uuid>;
}

impl<T: AuthContext> AuthContext for Option<T> {
    fn current_user_id(&self) -> Option<Uuid> {
        self.as_ref().and_then(|ctx| ctx.current_user_id())
    }
}

impl AuthContext for Uuid {
    fn current_user_id(&self) -> Option<Uuid> {
        Some(*self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserBooking {
    pub booking_id: i32,
    pub showtime_id: i32,
    pub booking_time: DateTime<Utc>,
    pub total_price: i64,
    pub seat_ids: Vec<i32>,
}

/// Entry point for the rest of the application. Holds no state besides its
/// collaborators.
#[derive(Clone)]
pub struct BookingService {
    db: DatabaseConnection,
    pricing: Arc<dyn PricingPolicy>,
}

impl BookingService {
    pub fn new(db: DatabaseConnection, pricing: Arc<dyn PricingPolicy>) -> Self {
        Self { db, pricing }
    }

    pub async fn list_showtimes(&self) -> BookingResult<Vec<ShowtimeDetails>> {
        Ok(catalog::list_showtimes(&self.db).await?)
    }

    pub async fn view_seats(&self, showtime_id: i32) -> BookingResult<SeatMap> {
        availability::get_seat_map(&self.db, showtime_id).await
    }

    pub async fn availability(&self, showtime_id: i32) -> BookingResult<Vec<SeatAvailability>> {
        availability::get_availability(&self.db, showtime_id).await
    }

    /// Validate the raw seat ids and run the booking transaction.
    ///
    /// An empty or malformed selection is rejected before the store is
    /// touched.
    pub async fn submit_booking(
        &self,
        auth: &impl AuthContext,
        showtime_id: i32,
        seat_ids: Vec<i32>,
    ) -> BookingResult<BookingConfirmation> {
        let user_id = auth.current_user_id().ok_or(BookingError::Unauthorized)?;
        let seats = SeatSelection::new(seat_ids)?;

        transaction::book(&self.db, self.pricing.as_ref(), user_id, showtime_id, &seats).await
    }

    /// Bookings of `user_id`, newest first.
    pub async fn list_user_bookings(&self, user_id: Uuid) -> BookingResult<Vec<UserBooking>> {
        let bookings = booking::Entity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::BookingTime)
            .order_by_desc(booking::Column::Id)
            .all(&self.db)
            .await?;

        let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
        let mut seats_by_booking: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in booked_seat::Entity::find()
            .filter(booked_seat::Column::BookingId.is_in(ids))
            .all(&self.db)
            .await?
        {
            seats_by_booking.entry(row.booking_id).or_default().push(row.seat_id);
        }

        Ok(bookings
            .into_iter()
            .map(|b| {
                let mut seat_ids = seats_by_booking.remove(&b.id).unwrap_or_default();
                seat_ids.sort_unstable();
                UserBooking {
                    booking_id: b.id,
                    showtime_id: b.showtime_id,
                    booking_time: b.booking_time.with_timezone(&Utc),
                    total_price: b.total_price,
                    seat_ids,
                }
            })
            .collect())
    }
}
