//! Book item business logic - Copies of a book and their circulation fields.
//!
//! `checkout` and `set_status` are plain field writes: they do not look at the
//! current value and enforce no transition order.

use crate::{
    entities::{BookFormat, BookItem, BookStatus, book_item},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, IntoActiveModel, QueryOrder, Set, prelude::*};
use tracing::debug;

/// Data of a new copy
#[derive(Clone, Debug)]
pub struct NewBookItem {
    /// Book the copy belongs to
    pub book_id: i64,
    /// Barcode, must be unique
    pub barcode: String,
    /// Reference-only copies stay in the library
    pub is_reference_only: bool,
    /// Purchase price
    pub price: f64,
    /// Physical or digital form
    pub format: BookFormat,
    /// Initial circulation status
    pub status: BookStatus,
    /// Day of purchase
    pub date_of_purchase: Date,
    /// Publication date of the edition
    pub publication_date: Date,
    /// Rack the copy is shelved on
    pub rack_id: Option<i64>,
}

/// Creates a copy. New copies are not borrowed and have no due date.
pub async fn create_book_item<C>(db: &C, new_item: NewBookItem) -> Result<book_item::Model>
where
    C: ConnectionTrait,
{
    let item = book_item::ActiveModel {
        book_id: Set(new_item.book_id),
        barcode: Set(new_item.barcode),
        is_reference_only: Set(new_item.is_reference_only),
        borrowed: Set(false),
        due_date: Set(None),
        price: Set(new_item.price),
        format: Set(new_item.format),
        status: Set(new_item.status),
        date_of_purchase: Set(new_item.date_of_purchase),
        publication_date: Set(new_item.publication_date),
        rack_id: Set(new_item.rack_id),
        ..Default::default()
    };
    Ok(item.insert(db).await?)
}

/// Finds a copy by its unique ID.
pub async fn get_book_item_by_id<C>(db: &C, item_id: i64) -> Result<Option<book_item::Model>>
where
    C: ConnectionTrait,
{
    BookItem::find_by_id(item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a copy by barcode.
pub async fn get_book_item_by_barcode<C>(
    db: &C,
    barcode: &str,
) -> Result<Option<book_item::Model>>
where
    C: ConnectionTrait,
{
    BookItem::find()
        .filter(book_item::Column::Barcode.eq(barcode))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists all copies of a book, ordered by barcode.
pub async fn get_book_items_for_book<C>(db: &C, book_id: i64) -> Result<Vec<book_item::Model>>
where
    C: ConnectionTrait,
{
    BookItem::find()
        .filter(book_item::Column::BookId.eq(book_id))
        .order_by_asc(book_item::Column::Barcode)
        .all(db)
        .await
        .map_err(Into::into)
}

async fn load<C>(db: &C, item_id: i64) -> Result<book_item::ActiveModel>
where
    C: ConnectionTrait,
{
    BookItem::find_by_id(item_id)
        .one(db)
        .await?
        .map(IntoActiveModel::into_active_model)
        .ok_or_else(|| Error::not_found("BookItem", item_id))
}

/// Marks the copy as borrowed.
pub async fn checkout<C>(db: &C, item_id: i64) -> Result<book_item::Model>
where
    C: ConnectionTrait,
{
    let mut item = load(db, item_id).await?;
    item.borrowed = Set(true);
    let item = item.update(db).await?;
    debug!("Checked out book item {}", item.barcode);
    Ok(item)
}

/// Overwrites the circulation status.
pub async fn set_status<C>(db: &C, item_id: i64, status: BookStatus) -> Result<book_item::Model>
where
    C: ConnectionTrait,
{
    let mut item = load(db, item_id).await?;
    item.status = Set(status);
    Ok(item.update(db).await?)
}

/// Overwrites the due date; `None` clears it.
pub async fn set_due_date<C>(
    db: &C,
    item_id: i64,
    due_date: Option<Date>,
) -> Result<book_item::Model>
where
    C: ConnectionTrait,
{
    let mut item = load(db, item_id).await?;
    item.due_date = Set(due_date);
    Ok(item.update(db).await?)
}

/// Marks the copy as back in the library: not borrowed, no due date.
pub(crate) async fn check_in<C>(db: &C, item_id: i64) -> Result<book_item::Model>
where
    C: ConnectionTrait,
{
    let mut item = load(db, item_id).await?;
    item.borrowed = Set(false);
    item.due_date = Set(None);
    Ok(item.update(db).await?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, Statement};

    #[tokio::test]
    async fn test_new_item_defaults() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let item = create_test_book_item(&db, book.id, "BC-1").await?;

        assert!(!item.borrowed);
        assert!(item.due_date.is_none());
        assert_eq!(item.format, BookFormat::Hardcover);
        assert_eq!(item.status, BookStatus::Available);
        assert_eq!(item.price, 25.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_sets_borrowed() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let item = create_test_book_item(&db, book.id, "BC-1").await?;

        let item = checkout(&db, item.id).await?;
        assert!(item.borrowed);

        let stored = get_book_item_by_barcode(&db, "BC-1").await?;
        assert_eq!(stored.map(|i| i.borrowed), Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_status_allows_any_transition() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let item = create_test_book_item(&db, book.id, "BC-1").await?;

        let item = set_status(&db, item.id, BookStatus::Lost).await?;
        assert_eq!(item.status, BookStatus::Lost);
        let item = set_status(&db, item.id, BookStatus::Reserved).await?;
        assert_eq!(item.status, BookStatus::Reserved);
        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_missing_item() -> Result<()> {
        let db = setup_test_db().await?;
        let result = checkout(&db, 11).await;
        assert!(matches!(result, Err(Error::NotFound { entity: "BookItem", .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_barcode_rejected() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        create_test_book_item(&db, book.id, "BC-1").await?;
        let result = create_test_book_item(&db, book.id, "BC-1").await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_due_date_may_be_cleared() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let item = create_test_book_item(&db, book.id, "BC-1").await?;

        let item = set_due_date(&db, item.id, Some(date(2024, 5, 1))).await?;
        assert_eq!(item.due_date, Some(date(2024, 5, 1)));
        let item = set_due_date(&db, item.id, None).await?;
        assert!(item.due_date.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_format_rejected_by_schema() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let insert = |format: &str, status: &str, barcode: &str| {
            Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "INSERT INTO book_items (book_id, barcode, is_reference_only, borrowed, due_date, \
                 price, format, status, date_of_purchase, publication_date, rack_id) \
                 VALUES (?, ?, 0, 0, NULL, 10.0, ?, ?, '2024-01-01', '2020-01-01', NULL)",
                [
                    book.id.into(),
                    barcode.into(),
                    format.into(),
                    status.into(),
                ],
            )
        };

        assert!(db.execute(insert("Scroll", "Available", "BC-X")).await.is_err());
        assert!(db.execute(insert("Paperback", "Stolen", "BC-Y")).await.is_err());
        db.execute(insert("Paperback", "Available", "BC-Z")).await?;
        assert_eq!(get_book_items_for_book(&db, book.id).await?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!("Ebook".parse::<BookFormat>().ok(), Some(BookFormat::Ebook));
        assert_eq!("Loaned".parse::<BookStatus>().ok(), Some(BookStatus::Loaned));
        assert!(matches!(
            "Scroll".parse::<BookFormat>(),
            Err(Error::InvalidValue { field: "format", .. })
        ));
        assert!("available".parse::<BookStatus>().is_err());
        assert_eq!(BookFormat::Audiobook.to_string(), "Audiobook");
    }
}
