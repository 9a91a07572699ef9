use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_screens::Screen;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::Id))
                    .col(integer(Seat::ScreenId).not_null())
                    .col(integer(Seat::SeatNumber).not_null())
                    .col(string_len(Seat::SeatType, 20).not_null().default("standard"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_screen")
                            .from(Seat::Table, Seat::ScreenId)
                            .to(Screen::Table, Screen::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One physical seat number per screen
        manager
            .create_index(
                Index::create()
                    .name("idx_seat_screen_number")
                    .table(Seat::Table)
                    .col(Seat::ScreenId)
                    .col(Seat::SeatNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Seat {
    Table,
    Id,
    ScreenId,
    SeatNumber,
    SeatType,
}
