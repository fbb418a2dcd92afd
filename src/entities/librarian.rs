//! Librarian entity - Staff profile allowed to block and unblock members.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Librarian database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "librarians")]
pub struct Model {
    /// Unique identifier for the librarian
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Profile of the staff member
    #[sea_orm(unique)]
    pub profile_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
