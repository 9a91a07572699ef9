pub mod booking;
pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use booking::BookingService;
pub use config::Config;
pub use error::{AppError, AppResult, BookingError, BookingResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bookings: BookingService,
}

impl AppState {
    /// Build the state with the flat per-seat pricing from `config`.
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let pricing = Arc::new(booking::FlatRatePricing::new(config.seat_price));
        let bookings = BookingService::new(db, pricing);
        Self { config, bookings }
    }
}
