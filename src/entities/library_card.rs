//! Library card entity - A numbered card issued to patrons.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Library card database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "library_cards")]
pub struct Model {
    /// Unique identifier for the card
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Number printed on the card, unique across all cards
    #[sea_orm(unique)]
    pub card_number: String,
    /// When the card was issued
    pub issued_at: DateTimeUtc,
    /// Deactivated cards are kept but no longer accepted
    pub active: bool,
}

/// `LibraryCard` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
