use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A physical seat. Seats never change once created; availability is
/// tracked per showtime through `booked_seat`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub screen_id: i32,
    pub seat_number: i32,
    pub seat_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::screen::Entity",
        from = "Column::ScreenId",
        to = "super::screen::Column::Id"
    )]
    Screen,
    #[sea_orm(has_many = "super::booked_seat::Entity")]
    BookedSeats,
}

impl Related<super::screen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screen.def()
    }
}

impl Related<super::booked_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookedSeats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
