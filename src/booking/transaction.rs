//! The atomic validate-and-claim unit behind every booking.
//!
//! Each attempt runs inside one database transaction:
//!
//! 1. resolve the showtime and the selected seats, rejecting seats that are
//!    not on the showtime's screen;
//! 2. look for seats already claimed for the showtime;
//! 3. insert the booking, one `booked_seat` row per seat and the audit log
//!    entry, then commit.
//!
//! The check in step 2 is only a fast path. Two overlapping attempts can both
//! pass it; the unique index on `booked_seat (showtime_id, seat_id)` then
//! makes the second insert fail, and that failure is reported as a seat
//! conflict after the whole transaction has been rolled back.
//!
//! Dropping the future before commit drops the open transaction, which rolls
//! it back. Nothing is visible outside the transaction until commit.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, SqlErr, TransactionTrait,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::conflict::find_conflicts;
use super::pricing::PricingPolicy;
use super::selection::SeatSelection;
use crate::entities::{booked_seat, booking, log_entry, seat, showtime};
use crate::error::{BookingError, BookingResult};

/// First attempt plus one retry after a transient store failure.
const MAX_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub booking_id: i32,
    pub showtime_id: i32,
    pub seat_ids: Vec<i32>,
    pub total_price: i64,
}

/// Why a single attempt did not commit.
#[derive(Debug)]
enum AttemptError {
    /// Final business outcome, never retried.
    Rejected(BookingError),
    Store(DbErr),
}

impl From<DbErr> for AttemptError {
    fn from(err: DbErr) -> Self {
        AttemptError::Store(err)
    }
}

/// Claim `seats` for `showtime_id` on behalf of `user_id`.
///
/// For any two calls whose selections overlap on the same showtime at most
/// one commits; the other gets `SeatConflict` listing the seats that are now
/// taken.
pub async fn book<C>(
    db: &C,
    pricing: &dyn PricingPolicy,
    user_id: Uuid,
    showtime_id: i32,
    seats: &SeatSelection,
) -> BookingResult<BookingConfirmation>
where
    C: ConnectionTrait + TransactionTrait,
{
    let mut attempt = 1;

    loop {
        let failure = match try_book(db, pricing, user_id, showtime_id, seats).await {
            Ok(confirmation) => {
                info!(
                    booking_id = confirmation.booking_id,
                    %user_id,
                    showtime_id,
                    seats = ?confirmation.seat_ids,
                    total_price = confirmation.total_price,
                    "Booking committed"
                );
                return Ok(confirmation);
            }
            Err(AttemptError::Rejected(err)) => {
                if let BookingError::SeatConflict(conflicts) = &err {
                    info!(%user_id, showtime_id, conflicts = ?conflicts, "Seat conflict, booking aborted");
                }
                return Err(err);
            }
            Err(AttemptError::Store(err)) if is_unique_violation(&err) => {
                // The transaction is gone; read what actually won.
                let conflicts = find_conflicts(db, showtime_id, seats).await?;
                if !conflicts.is_empty() {
                    info!(
                        %user_id,
                        showtime_id,
                        conflicts = ?conflicts,
                        "Lost seat race to a concurrent booking"
                    );
                    return Err(BookingError::SeatConflict(conflicts));
                }
                // The rival rolled back after all, so the seats are free again.
                err
            }
            Err(AttemptError::Store(err)) => err,
        };

        if attempt >= MAX_ATTEMPTS {
            tracing::error!(%user_id, showtime_id, error = %failure, "Booking transaction failed");
            return Err(BookingError::TransactionFailure(failure.to_string()));
        }

        warn!(
            %user_id,
            showtime_id,
            attempt,
            error = %failure,
            "Booking transaction failed, retrying"
        );
        attempt += 1;
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

async fn try_book<C>(
    db: &C,
    pricing: &dyn PricingPolicy,
    user_id: Uuid,
    showtime_id: i32,
    seats: &SeatSelection,
) -> Result<BookingConfirmation, AttemptError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let (showtime, seat_rows) = match validate(&txn, showtime_id, seats).await {
        Ok(resolved) => resolved,
        Err(err) => {
            abort(txn).await;
            return Err(err);
        }
    };

    let conflicts = find_conflicts(&txn, showtime_id, seats).await?;
    if !conflicts.is_empty() {
        abort(txn).await;
        return Err(AttemptError::Rejected(BookingError::SeatConflict(conflicts)));
    }

    let Some(total_price) = pricing.price(&showtime, &seat_rows) else {
        abort(txn).await;
        return Err(AttemptError::Rejected(BookingError::TransactionFailure(
            "total price out of range".to_string(),
        )));
    };
    let now = Utc::now();

    let booking = booking::ActiveModel {
        user_id: Set(user_id),
        showtime_id: Set(showtime_id),
        booking_time: Set(now.into()),
        total_price: Set(total_price),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let rows = seats.iter().map(|seat_id| booked_seat::ActiveModel {
        booking_id: Set(booking.id),
        seat_id: Set(seat_id),
        showtime_id: Set(showtime_id),
    });
    booked_seat::Entity::insert_many(rows)
        .exec_without_returning(&txn)
        .await?;

    log_entry::ActiveModel {
        user_id: Set(user_id),
        admin_id: Set(None),
        action_time: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    debug!(booking_id = booking.id, "Booking transaction committed");

    Ok(BookingConfirmation {
        booking_id: booking.id,
        showtime_id,
        seat_ids: seats.to_vec(),
        total_price,
    })
}

/// Roll back an attempt that ended before any write.
async fn abort(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        warn!(error = %err, "Rollback failed");
    }
}

/// Resolve the showtime and the selected seats inside the transaction.
async fn validate(
    txn: &DatabaseTransaction,
    showtime_id: i32,
    seats: &SeatSelection,
) -> Result<(showtime::Model, Vec<seat::Model>), AttemptError> {
    let showtime = showtime::Entity::find_by_id(showtime_id)
        .one(txn)
        .await?
        .ok_or(AttemptError::Rejected(BookingError::ShowtimeNotFound(showtime_id)))?;

    let seat_rows = seat::Entity::find()
        .filter(seat::Column::Id.is_in(seats.to_vec()))
        .filter(seat::Column::ScreenId.eq(showtime.screen_id))
        .all(txn)
        .await?;

    // Unknown ids and seats of another screen are both foreign to this showtime.
    let foreign: Vec<i32> = seats
        .iter()
        .filter(|id| !seat_rows.iter().any(|s| s.id == *id))
        .collect();
    if !foreign.is_empty() {
        return Err(AttemptError::Rejected(BookingError::SeatNotOnScreen(foreign)));
    }

    Ok((showtime, seat_rows))
}
