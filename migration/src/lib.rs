pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_theaters;
mod m20250301_000002_create_screens;
mod m20250301_000003_create_seats;
mod m20250301_000004_create_movies;
mod m20250301_000005_create_showtimes;
mod m20250301_000006_create_bookings;
mod m20250301_000007_create_booked_seats;
mod m20250301_000008_create_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_theaters::Migration),
            Box::new(m20250301_000002_create_screens::Migration),
            Box::new(m20250301_000003_create_seats::Migration),
            Box::new(m20250301_000004_create_movies::Migration),
            Box::new(m20250301_000005_create_showtimes::Migration),
            Box::new(m20250301_000006_create_bookings::Migration),
            Box::new(m20250301_000007_create_booked_seats::Migration),
            Box::new(m20250301_000008_create_logs::Migration),
        ]
    }
}
