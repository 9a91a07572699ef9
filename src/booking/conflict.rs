use std::collections::HashSet;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use super::selection::SeatSelection;
use crate::entities::booked_seat;

/// Ids of every seat already booked for `showtime_id`.
pub async fn booked_seat_ids<C: ConnectionTrait>(
    db: &C,
    showtime_id: i32,
) -> Result<HashSet<i32>, DbErr> {
    let ids: Vec<i32> = booked_seat::Entity::find()
        .select_only()
        .column(booked_seat::Column::SeatId)
        .filter(booked_seat::Column::ShowtimeId.eq(showtime_id))
        .into_tuple()
        .all(db)
        .await?;

    Ok(ids.into_iter().collect())
}

/// The subset of `seats` already claimed for `showtime_id`, ascending.
///
/// Run against a transaction this sees that transaction's view; run against
/// the pool it sees committed state.
pub async fn find_conflicts<C: ConnectionTrait>(
    db: &C,
    showtime_id: i32,
    seats: &SeatSelection,
) -> Result<Vec<i32>, DbErr> {
    let mut conflicts: Vec<i32> = booked_seat::Entity::find()
        .select_only()
        .column(booked_seat::Column::SeatId)
        .filter(booked_seat::Column::ShowtimeId.eq(showtime_id))
        .filter(booked_seat::Column::SeatId.is_in(seats.to_vec()))
        .into_tuple()
        .all(db)
        .await?;

    conflicts.sort_unstable();
    conflicts.dedup();
    Ok(conflicts)
}
