use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_theaters::Theater;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Screen::Table)
                    .if_not_exists()
                    .col(pk_auto(Screen::Id))
                    .col(integer(Screen::TheaterId).not_null())
                    .col(integer(Screen::ScreenNumber).not_null())
                    .col(integer(Screen::TotalSeats).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_screen_theater")
                            .from(Screen::Table, Screen::TheaterId)
                            .to(Theater::Table, Theater::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Screen::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Screen {
    Table,
    Id,
    TheaterId,
    ScreenNumber,
    TotalSeats,
}
