//! Book lending entity - A copy loaned to a member.
//!
//! A lending is open while `return_date` is `None`. The number of open lendings
//! is the member's checked-out count.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Book lending database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book_lendings")]
pub struct Model {
    /// Unique identifier for the lending
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Loaned copy
    pub book_item_id: i64,
    /// Borrowing member
    pub member_id: i64,
    /// Day the copy left the library
    pub creation_date: Date,
    /// Day the copy is due back
    pub due_date: Date,
    /// Day the copy came back, `None` while still out
    pub return_date: Option<Date>,
}

impl Model {
    /// Whether the copy is still checked out under this lending.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Defines relationships between `BookLending` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each lending is for one copy
    #[sea_orm(
        belongs_to = "super::book_item::Entity",
        from = "Column::BookItemId",
        to = "super::book_item::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BookItem,
    /// Each lending is to one member
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
