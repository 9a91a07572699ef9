//! Read-only access to catalog data owned by other subsystems: showtimes
//! with their movie/screen/theater context, and the seats of a screen.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::entities::{movie, screen, seat, showtime, theater};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowtimeDetails {
    pub id: i32,
    pub movie_id: i32,
    pub movie_title: String,
    pub theater_name: String,
    pub screen_id: i32,
    pub screen_number: i32,
    pub total_seats: i32,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
}

impl ShowtimeDetails {
    fn resolve(
        st: &showtime::Model,
        movies: &[movie::Model],
        screens: &[screen::Model],
        theaters: &[theater::Model],
    ) -> Option<Self> {
        let movie = movies.iter().find(|m| m.id == st.movie_id)?;
        let screen = screens.iter().find(|s| s.id == st.screen_id)?;
        let theater = theaters.iter().find(|t| t.id == screen.theater_id)?;

        Some(Self {
            id: st.id,
            movie_id: movie.id,
            movie_title: movie.title.clone(),
            theater_name: theater.name.clone(),
            screen_id: screen.id,
            screen_number: screen.screen_number,
            total_seats: screen.total_seats,
            show_date: st.show_date,
            show_time: st.show_time,
        })
    }
}

/// All showtimes ordered by date then time. Showtimes whose movie, screen or
/// theater cannot be resolved are skipped.
pub async fn list_showtimes<C: ConnectionTrait>(db: &C) -> Result<Vec<ShowtimeDetails>, DbErr> {
    let showtimes = showtime::Entity::find()
        .order_by_asc(showtime::Column::ShowDate)
        .order_by_asc(showtime::Column::ShowTime)
        .order_by_asc(showtime::Column::Id)
        .all(db)
        .await?;
    let movies = movie::Entity::find().all(db).await?;
    let screens = screen::Entity::find().all(db).await?;
    let theaters = theater::Entity::find().all(db).await?;

    Ok(showtimes
        .iter()
        .filter_map(|st| ShowtimeDetails::resolve(st, &movies, &screens, &theaters))
        .collect())
}

/// Look up a single showtime. `None` if the showtime or any link in the
/// showtime -> screen -> theater / movie chain is missing.
pub async fn get_showtime<C: ConnectionTrait>(
    db: &C,
    showtime_id: i32,
) -> Result<Option<ShowtimeDetails>, DbErr> {
    let Some(st) = showtime::Entity::find_by_id(showtime_id).one(db).await? else {
        return Ok(None);
    };
    let Some(movie) = movie::Entity::find_by_id(st.movie_id).one(db).await? else {
        return Ok(None);
    };
    let Some(screen) = screen::Entity::find_by_id(st.screen_id).one(db).await? else {
        return Ok(None);
    };
    let Some(theater) = theater::Entity::find_by_id(screen.theater_id).one(db).await? else {
        return Ok(None);
    };

    Ok(ShowtimeDetails::resolve(&st, &[movie], &[screen], &[theater]))
}

/// Seats of a screen ordered by seat number.
pub async fn list_seats<C: ConnectionTrait>(db: &C, screen_id: i32) -> Result<Vec<seat::Model>, DbErr> {
    seat::Entity::find()
        .filter(seat::Column::ScreenId.eq(screen_id))
        .order_by_asc(seat::Column::SeatNumber)
        .all(db)
        .await
}
