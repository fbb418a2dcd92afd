//! Catalog business logic - Building and querying the book search indexes.
//!
//! A catalog stores four JSON indexes mapping a lookup key to book ids:
//! title, author name, subject and publication date (taken from the copies).
//! [`update_catalog`] rebuilds all four from the current tables; searches are
//! exact-key lookups against the stored indexes, so they reflect the catalog as
//! of its last update.

use crate::{
    entities::{Author, Book, BookItem, Catalog, book, book_item, catalog},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, IntoActiveModel, QueryOrder, QuerySelect, Set, prelude::*};
use std::collections::BTreeMap;
use tracing::info;

type Index = BTreeMap<String, Vec<i64>>;

/// The index a search runs against
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogIndex {
    /// Exact title
    Title,
    /// Author name
    Author,
    /// Subject heading
    Subject,
    /// Publication date as `YYYY-MM-DD`
    PublicationDate,
}

impl CatalogIndex {
    const fn field(self) -> &'static str {
        match self {
            Self::Title => "book_titles",
            Self::Author => "book_authors",
            Self::Subject => "book_subjects",
            Self::PublicationDate => "book_publication_dates",
        }
    }

    const fn column(self, catalog: &catalog::Model) -> &Json {
        match self {
            Self::Title => &catalog.book_titles,
            Self::Author => &catalog.book_authors,
            Self::Subject => &catalog.book_subjects,
            Self::PublicationDate => &catalog.book_publication_dates,
        }
    }
}

fn to_json(field: &'static str, index: &Index) -> Result<Json> {
    serde_json::to_value(index).map_err(|e| Error::InvalidValue {
        field,
        value: e.to_string(),
    })
}

fn empty_index() -> Json {
    Json::Object(serde_json::Map::new())
}

/// Creates an empty catalog.
pub async fn create_catalog<C>(db: &C, creation_date: Date) -> Result<catalog::Model>
where
    C: ConnectionTrait,
{
    let catalog = catalog::ActiveModel {
        creation_date: Set(creation_date),
        total_books: Set(0),
        book_titles: Set(empty_index()),
        book_authors: Set(empty_index()),
        book_subjects: Set(empty_index()),
        book_publication_dates: Set(empty_index()),
        ..Default::default()
    };
    Ok(catalog.insert(db).await?)
}

/// Finds a catalog by its unique ID.
pub async fn get_catalog_by_id<C>(db: &C, catalog_id: i64) -> Result<Option<catalog::Model>>
where
    C: ConnectionTrait,
{
    Catalog::find_by_id(catalog_id)
        .one(db)
        .await
        .map_err(Into::into)
}

fn push(index: &mut Index, key: String, book_id: i64) {
    let ids = index.entry(key).or_default();
    if !ids.contains(&book_id) {
        ids.push(book_id);
    }
}

/// Rebuilds every index of the catalog and its book count from the current tables.
pub async fn update_catalog<C>(db: &C, catalog_id: i64) -> Result<catalog::Model>
where
    C: ConnectionTrait,
{
    let catalog = Catalog::find_by_id(catalog_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Catalog", catalog_id))?;

    let books = Book::find()
        .find_also_related(Author)
        .order_by_asc(book::Column::Id)
        .all(db)
        .await?;
    let publications: Vec<(i64, Date)> = BookItem::find()
        .select_only()
        .column(book_item::Column::BookId)
        .column(book_item::Column::PublicationDate)
        .order_by_asc(book_item::Column::BookId)
        .into_tuple()
        .all(db)
        .await?;

    let mut titles = Index::new();
    let mut authors = Index::new();
    let mut subjects = Index::new();
    let mut dates = Index::new();
    for (book, author) in &books {
        push(&mut titles, book.title.clone(), book.id);
        push(&mut subjects, book.subject.clone(), book.id);
        if let Some(author) = author {
            push(&mut authors, author.name.clone(), book.id);
        }
    }
    for (book_id, published) in publications {
        push(&mut dates, published.format("%Y-%m-%d").to_string(), book_id);
    }

    let total_books = i32::try_from(books.len()).map_err(|_| Error::InvalidValue {
        field: "total_books",
        value: books.len().to_string(),
    })?;

    let mut catalog = catalog.into_active_model();
    catalog.total_books = Set(total_books);
    catalog.book_titles = Set(to_json(CatalogIndex::Title.field(), &titles)?);
    catalog.book_authors = Set(to_json(CatalogIndex::Author.field(), &authors)?);
    catalog.book_subjects = Set(to_json(CatalogIndex::Subject.field(), &subjects)?);
    catalog.book_publication_dates =
        Set(to_json(CatalogIndex::PublicationDate.field(), &dates)?);
    let catalog = catalog.update(db).await?;

    info!(
        "Catalog {} updated: {} books indexed",
        catalog.id, catalog.total_books
    );
    Ok(catalog)
}

/// Returns the books stored under `key` in the chosen index, ordered by id.
pub async fn search<C>(
    db: &C,
    catalog_id: i64,
    index: CatalogIndex,
    key: &str,
) -> Result<Vec<book::Model>>
where
    C: ConnectionTrait,
{
    let catalog = Catalog::find_by_id(catalog_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Catalog", catalog_id))?;

    let entries: Index =
        serde_json::from_value(index.column(&catalog).clone()).map_err(|e| {
            Error::InvalidValue {
                field: index.field(),
                value: e.to_string(),
            }
        })?;
    let Some(ids) = entries.get(key) else {
        return Ok(Vec::new());
    };

    Book::find()
        .filter(book::Column::Id.is_in(ids.iter().copied()))
        .order_by_asc(book::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Books whose title is exactly `title`.
pub async fn search_by_title<C>(db: &C, catalog_id: i64, title: &str) -> Result<Vec<book::Model>>
where
    C: ConnectionTrait,
{
    search(db, catalog_id, CatalogIndex::Title, title).await
}

/// Books credited to the author named `author`.
pub async fn search_by_author<C>(db: &C, catalog_id: i64, author: &str) -> Result<Vec<book::Model>>
where
    C: ConnectionTrait,
{
    search(db, catalog_id, CatalogIndex::Author, author).await
}

/// Books filed under `subject`.
pub async fn search_by_subject<C>(
    db: &C,
    catalog_id: i64,
    subject: &str,
) -> Result<Vec<book::Model>>
where
    C: ConnectionTrait,
{
    search(db, catalog_id, CatalogIndex::Subject, subject).await
}

/// Books with a copy published on `published`.
pub async fn search_by_publication_date<C>(
    db: &C,
    catalog_id: i64,
    published: Date,
) -> Result<Vec<book::Model>>
where
    C: ConnectionTrait,
{
    let key = published.format("%Y-%m-%d").to_string();
    search(db, catalog_id, CatalogIndex::PublicationDate, &key).await
}
