//! Catalog entity - Search indexes over book metadata.
//!
//! Each index column holds a JSON object mapping a key (title, author name,
//! subject, or ISO publication date) to the ids of the matching books.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catalogs")]
pub struct Model {
    /// Unique identifier for the catalog
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day the catalog was created
    pub creation_date: Date,
    /// Number of books indexed by the last update
    pub total_books: i32,
    /// Title -> book ids
    pub book_titles: Json,
    /// Author name -> book ids
    pub book_authors: Json,
    /// Subject -> book ids
    pub book_subjects: Json,
    /// Publication date (`YYYY-MM-DD`) -> book ids
    pub book_publication_dates: Json,
}

/// `Catalog` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
