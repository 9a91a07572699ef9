use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_seats::Seat;
use super::m20250301_000005_create_showtimes::Showtime;
use super::m20250301_000006_create_bookings::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookedSeat::Table)
                    .if_not_exists()
                    .col(integer(BookedSeat::BookingId).not_null())
                    .col(integer(BookedSeat::SeatId).not_null())
                    .col(integer(BookedSeat::ShowtimeId).not_null())
                    .primary_key(
                        Index::create()
                            .col(BookedSeat::BookingId)
                            .col(BookedSeat::SeatId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_seat_booking")
                            .from(BookedSeat::Table, BookedSeat::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_seat_seat")
                            .from(BookedSeat::Table, BookedSeat::SeatId)
                            .to(Seat::Table, Seat::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_seat_showtime")
                            .from(BookedSeat::Table, BookedSeat::ShowtimeId)
                            .to(Showtime::Table, Showtime::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // A seat can be claimed at most once per showtime. The booking engine
        // relies on this index to reject the losing side of a concurrent race.
        manager
            .create_index(
                Index::create()
                    .name("idx_booked_seat_showtime_seat")
                    .table(BookedSeat::Table)
                    .col(BookedSeat::ShowtimeId)
                    .col(BookedSeat::SeatId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookedSeat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookedSeat {
    Table,
    BookingId,
    SeatId,
    ShowtimeId,
}
