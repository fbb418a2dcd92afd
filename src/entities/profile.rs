//! Profile entity - Library-side details attached 1:1 to a [`super::user`] row.
//!
//! Members, librarians and accounts all hang off a profile.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Unique identifier for the profile
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user; unique so the link stays one-to-one
    #[sea_orm(unique)]
    pub user_id: i64,
    /// Postal address
    pub address: String,
    /// Phone number
    pub phone: String,
}

/// Defines relationships between Profile and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each profile belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    /// A profile may be a member
    #[sea_orm(has_one = "super::member::Entity")]
    Member,
    /// A profile may be a librarian
    #[sea_orm(has_one = "super::librarian::Entity")]
    Librarian,
    /// A profile may own an account
    #[sea_orm(has_one = "super::account::Entity")]
    Account,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::librarian::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Librarian.def()
    }
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
