//! Book reservation entity - A member's claim on a copy pending availability.
//!
//! Status transitions are not constrained: any literal may follow any other.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Progress of a reservation
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ReservationStatus {
    #[sea_orm(string_value = "Waiting")]
    Waiting,
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Canceled")]
    Canceled,
    /// Stored as the literal `"None"`
    #[sea_orm(string_value = "None")]
    #[serde(rename = "None")]
    Unspecified,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

super::impl_literal!(ReservationStatus, "reservation status");

/// Book reservation database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book_reservations")]
pub struct Model {
    /// Unique identifier for the reservation
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Reserved copy
    pub book_item_id: i64,
    /// Member holding the reservation
    pub member_id: i64,
    /// Day the reservation was placed
    pub reservation_date: Date,
    pub status: ReservationStatus,
}

/// Defines relationships between `BookReservation` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book_item::Entity",
        from = "Column::BookItemId",
        to = "super::book_item::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BookItem,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::book_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookItem.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
