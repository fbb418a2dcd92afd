//! Rack entity - Shelf location where book items are kept.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rack database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "racks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Rack number as labelled on the shelf
    pub number: i32,
    /// Where the rack stands (e.g., "Floor 2, east wing")
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_item::Entity")]
    BookItems,
}

impl Related<super::book_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
