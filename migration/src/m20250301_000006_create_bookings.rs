use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000005_create_showtimes::Showtime;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(uuid(Booking::UserId).not_null())
                    .col(integer(Booking::ShowtimeId).not_null())
                    .col(
                        timestamp_with_time_zone(Booking::BookingTime)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(big_integer(Booking::TotalPrice).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_showtime")
                            .from(Booking::Table, Booking::ShowtimeId)
                            .to(Showtime::Table, Showtime::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    ShowtimeId,
    BookingTime,
    TotalPrice,
}
