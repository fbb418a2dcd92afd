//! Account entity - Login credentials and standing attached 1:1 to a profile.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Standing of an account
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AccountStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Closed")]
    Closed,
    #[sea_orm(string_value = "Canceled")]
    Canceled,
    #[sea_orm(string_value = "Blacklisted")]
    Blacklisted,
    /// Stored as the literal `"None"`
    #[sea_orm(string_value = "None")]
    #[serde(rename = "None")]
    Unspecified,
}

super::impl_literal!(AccountStatus, "account status");

/// Account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning profile
    #[sea_orm(unique)]
    pub profile_id: i64,
    /// Password as set by the owner or by a reset
    #[serde(skip_serializing)]
    pub password: String,
    pub status: AccountStatus,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each account belongs to one profile
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
