//! Book entity - A bibliographic title, identified by its ISBN.
//!
//! Physical and digital copies of a book are [`super::book_item`] rows.
//! Removing the book's author or genre removes the book, and removing the
//! book removes all of its copies.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Book database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    /// Unique identifier for the book
    #[sea_orm(primary_key)]
    pub id: i64,
    /// International Standard Book Number, unique across all books
    #[sea_orm(unique)]
    pub isbn: String,
    /// Title as printed on the cover
    pub title: String,
    /// Subject heading used by the catalog
    pub subject: String,
    /// Publishing house
    pub publisher: String,
    /// Language the book is written in
    pub language: String,
    /// Page count
    pub number_of_pages: i32,
    /// Author credited on the book
    pub author_id: i64,
    /// Genre the book is filed under
    pub genre_id: i64,
}

/// Defines relationships between Book and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each book belongs to one author
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Author,
    /// Each book belongs to one genre
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Genre,
    /// One book has many copies
    #[sea_orm(has_many = "super::book_item::Entity")]
    BookItems,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl Related<super::book_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
