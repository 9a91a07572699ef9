use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, Set,
};

use crate::config::Config;
use crate::entities::{movie, screen, seat, showtime, theater};
use crate::error::{AppError, AppResult};

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))
}

/// Ids created by [`seed_demo_catalog`].
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    pub theater_id: i32,
    pub screen_id: i32,
    pub seat_ids: Vec<i32>,
    pub movie_id: i32,
    pub showtime_id: i32,
}

/// Seed the demo catalog unless any theater already exists, in which case
/// nothing is written and `None` is returned.
pub async fn seed_demo_catalog(db: &DatabaseConnection) -> Result<Option<DemoCatalog>, DbErr> {
    if theater::Entity::find().count(db).await? > 0 {
        return Ok(None);
    }

    create_demo_catalog(db).await.map(Some)
}

/// Insert one theater with a three-seat screen, one movie and one showtime.
pub async fn create_demo_catalog<C: ConnectionTrait>(db: &C) -> Result<DemoCatalog, DbErr> {
    let theater = theater::ActiveModel {
        name: Set("Grand Cinema".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let screen = screen::ActiveModel {
        theater_id: Set(theater.id),
        screen_number: Set(1),
        total_seats: Set(3),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut seat_ids = Vec::new();
    for number in 1..=3 {
        let seat = seat::ActiveModel {
            screen_id: Set(screen.id),
            seat_number: Set(number),
            seat_type: Set("standard".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        seat_ids.push(seat.id);
    }

    let movie = movie::ActiveModel {
        title: Set("The Projectionist".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let show_date = NaiveDate::from_ymd_opt(2025, 3, 1)
        .ok_or_else(|| DbErr::Custom("invalid demo show date".to_string()))?;
    let show_time = NaiveTime::from_hms_opt(19, 30, 0)
        .ok_or_else(|| DbErr::Custom("invalid demo show time".to_string()))?;

    let showtime = showtime::ActiveModel {
        movie_id: Set(movie.id),
        screen_id: Set(screen.id),
        show_date: Set(show_date),
        show_time: Set(show_time),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(showtime_id = showtime.id, "Demo catalog seeded");

    Ok(DemoCatalog {
        theater_id: theater.id,
        screen_id: screen.id,
        seat_ids,
        movie_id: movie.id,
        showtime_id: showtime.id,
    })
}
