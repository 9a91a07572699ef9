use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_screens::Screen;
use super::m20250301_000004_create_movies::Movie;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Showtime::Table)
                    .if_not_exists()
                    .col(pk_auto(Showtime::Id))
                    .col(integer(Showtime::MovieId).not_null())
                    .col(integer(Showtime::ScreenId).not_null())
                    .col(date(Showtime::ShowDate).not_null())
                    .col(time(Showtime::ShowTime).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtime_movie")
                            .from(Showtime::Table, Showtime::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtime_screen")
                            .from(Showtime::Table, Showtime::ScreenId)
                            .to(Screen::Table, Screen::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Showtime::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Showtime {
    Table,
    Id,
    MovieId,
    ScreenId,
    ShowDate,
    ShowTime,
}
