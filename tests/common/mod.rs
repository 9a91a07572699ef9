#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    Set,
};
use sea_orm_migration::MigratorTrait;

use cinema_booking_backend::booking::{BookingService, FlatRatePricing};
use cinema_booking_backend::db::{seed_demo_catalog, DemoCatalog};
use cinema_booking_backend::entities::{booked_seat, booking, log_entry, screen, seat, showtime};

pub const SEAT_PRICE: i64 = 200;

/// Fresh in-memory database with the demo catalog: one screen with seats
/// 1, 2, 3 and one showtime.
///
/// The pool holds a single connection so every task sees the same in-memory
/// database; concurrent bookings queue on it for their transaction.
pub async fn setup() -> (DatabaseConnection, DemoCatalog) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(600))
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let catalog = seed_demo_catalog(&db).await.unwrap().unwrap();

    (db, catalog)
}

pub fn service(db: &DatabaseConnection) -> BookingService {
    BookingService::new(db.clone(), Arc::new(FlatRatePricing::new(SEAT_PRICE)))
}

/// Another showtime of the same movie on `screen_id`.
pub async fn add_showtime(db: &DatabaseConnection, catalog: &DemoCatalog, screen_id: i32) -> i32 {
    showtime::ActiveModel {
        movie_id: Set(catalog.movie_id),
        screen_id: Set(screen_id),
        show_date: Set(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()),
        show_time: Set(NaiveTime::from_hms_opt(21, 0, 0).unwrap()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

/// A second screen in the demo theater with seats numbered as given,
/// inserted in that order. Returns the screen id and the seat ids.
pub async fn add_screen(
    db: &DatabaseConnection,
    catalog: &DemoCatalog,
    seats: &[(i32, &str)],
) -> (i32, Vec<i32>) {
    let screen = screen::ActiveModel {
        theater_id: Set(catalog.theater_id),
        screen_number: Set(2),
        total_seats: Set(seats.len() as i32),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let mut ids = Vec::new();
    for (number, seat_type) in seats {
        let seat = seat::ActiveModel {
            screen_id: Set(screen.id),
            seat_number: Set(*number),
            seat_type: Set(seat_type.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        ids.push(seat.id);
    }

    (screen.id, ids)
}

/// (bookings, booked seats, log entries)
pub async fn row_counts(db: &DatabaseConnection) -> (u64, u64, u64) {
    (
        booking::Entity::find().count(db).await.unwrap(),
        booked_seat::Entity::find().count(db).await.unwrap(),
        log_entry::Entity::find().count(db).await.unwrap(),
    )
}
