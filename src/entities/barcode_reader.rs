//! Barcode reader entity - A scanner device registered with the library.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Barcode reader database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "barcode_readers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Device identifier, unique across all readers
    #[sea_orm(unique)]
    pub barcode: String,
    pub registered_at: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
