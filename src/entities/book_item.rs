//! Book item entity - One trackable copy of a [`super::book`], identified by barcode.
//!
//! `format` and `status` are closed literal sets. The Rust enums below restrict
//! what the crate writes; the table additionally carries `CHECK` constraints
//! (see [`crate::admin`]) so foreign writers are held to the same sets.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Physical or digital form of a copy
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BookFormat {
    #[sea_orm(string_value = "Hardcover")]
    Hardcover,
    #[sea_orm(string_value = "Paperback")]
    Paperback,
    #[sea_orm(string_value = "Audiobook")]
    Audiobook,
    #[sea_orm(string_value = "Ebook")]
    Ebook,
    #[sea_orm(string_value = "Newspaper")]
    Newspaper,
    #[sea_orm(string_value = "Magazine")]
    Magazine,
    #[sea_orm(string_value = "Journal")]
    Journal,
}

/// Circulation status of a copy
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BookStatus {
    #[sea_orm(string_value = "Available")]
    Available,
    #[sea_orm(string_value = "Reserved")]
    Reserved,
    #[sea_orm(string_value = "Loaned")]
    Loaned,
    #[sea_orm(string_value = "Lost")]
    Lost,
}

super::impl_literal!(BookFormat, "format");
super::impl_literal!(BookStatus, "status");

/// Book item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book_items")]
pub struct Model {
    /// Unique identifier for the copy
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Title this copy belongs to
    pub book_id: i64,
    /// Barcode printed on the copy, unique across all copies
    #[sea_orm(unique)]
    pub barcode: String,
    /// Reference-only copies may be read in the library but not borrowed
    pub is_reference_only: bool,
    /// Set by checkout
    pub borrowed: bool,
    /// Due date of the current loan, if any
    pub due_date: Option<Date>,
    /// Purchase price in dollars
    pub price: f64,
    pub format: BookFormat,
    pub status: BookStatus,
    /// Day the library bought the copy
    pub date_of_purchase: Date,
    /// Publication date of this edition
    pub publication_date: Date,
    /// Rack the copy is shelved on; cleared if the rack is removed
    pub rack_id: Option<i64>,
}

/// Defines relationships between `BookItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each copy belongs to one book
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Book,
    /// Each copy may sit on one rack
    #[sea_orm(
        belongs_to = "super::rack::Entity",
        from = "Column::RackId",
        to = "super::rack::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Rack,
    /// One copy has many reservations
    #[sea_orm(has_many = "super::book_reservation::Entity")]
    Reservations,
    /// One copy has many lendings over its lifetime
    #[sea_orm(has_many = "super::book_lending::Entity")]
    Lendings,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::rack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rack.def()
    }
}

impl Related<super::book_reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl Related<super::book_lending::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lendings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
