//! Book business logic - Authors, genres and bibliographic titles.
//!
//! Deleting a genre or an author removes its books, and with them every copy,
//! reservation and lending that hangs off those books.

use crate::{
    entities::{Author, Book, Genre, author, book, genre},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Bibliographic data of a new book
#[derive(Clone, Debug)]
pub struct NewBook {
    /// ISBN, must be unique
    pub isbn: String,
    /// Title
    pub title: String,
    /// Subject heading
    pub subject: String,
    /// Publisher
    pub publisher: String,
    /// Language
    pub language: String,
    /// Page count
    pub number_of_pages: i32,
    /// Credited author
    pub author_id: i64,
    /// Genre
    pub genre_id: i64,
}

/// Creates an author.
pub async fn create_author<C>(db: &C, name: String, description: String) -> Result<author::Model>
where
    C: ConnectionTrait,
{
    let author = author::ActiveModel {
        name: Set(name),
        description: Set(description),
        ..Default::default()
    };
    Ok(author.insert(db).await?)
}

/// Creates a genre.
pub async fn create_genre<C>(db: &C, name: String) -> Result<genre::Model>
where
    C: ConnectionTrait,
{
    let genre = genre::ActiveModel {
        name: Set(name),
        ..Default::default()
    };
    Ok(genre.insert(db).await?)
}

/// Finds a genre by exact name.
pub async fn get_genre_by_name<C>(db: &C, name: &str) -> Result<Option<genre::Model>>
where
    C: ConnectionTrait,
{
    Genre::find()
        .filter(genre::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a book. Fails with a database error if the ISBN is already taken
/// or the author / genre does not exist.
pub async fn create_book<C>(db: &C, new_book: NewBook) -> Result<book::Model>
where
    C: ConnectionTrait,
{
    let book = book::ActiveModel {
        isbn: Set(new_book.isbn),
        title: Set(new_book.title),
        subject: Set(new_book.subject),
        publisher: Set(new_book.publisher),
        language: Set(new_book.language),
        number_of_pages: Set(new_book.number_of_pages),
        author_id: Set(new_book.author_id),
        genre_id: Set(new_book.genre_id),
        ..Default::default()
    };
    Ok(book.insert(db).await?)
}

/// Finds a book by its unique ID.
pub async fn get_book_by_id<C>(db: &C, book_id: i64) -> Result<Option<book::Model>>
where
    C: ConnectionTrait,
{
    Book::find_by_id(book_id).one(db).await.map_err(Into::into)
}

/// Finds a book by ISBN.
pub async fn get_book_by_isbn<C>(db: &C, isbn: &str) -> Result<Option<book::Model>>
where
    C: ConnectionTrait,
{
    Book::find()
        .filter(book::Column::Isbn.eq(isbn))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists the books filed under a genre, ordered by title.
pub async fn get_books_for_genre<C>(db: &C, genre_id: i64) -> Result<Vec<book::Model>>
where
    C: ConnectionTrait,
{
    Book::find()
        .filter(book::Column::GenreId.eq(genre_id))
        .order_by_asc(book::Column::Title)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a genre and, through the cascade, all of its books.
pub async fn delete_genre<C>(db: &C, genre_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Genre::delete_by_id(genre_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Genre", genre_id));
    }
    info!("Deleted genre {}", genre_id);
    Ok(())
}

/// Deletes an author and, through the cascade, all of their books.
pub async fn delete_author<C>(db: &C, author_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Author::delete_by_id(author_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Author", author_id));
    }
    info!("Deleted author {}", author_id);
    Ok(())
}

/// Deletes a book and, through the cascade, all of its copies.
pub async fn delete_book<C>(db: &C, book_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Book::delete_by_id(book_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Book", book_id));
    }
    info!("Deleted book {}", book_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BookItem;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_create_and_find_book() -> Result<()> {
        let (db, book) = setup_with_book().await?;

        let by_isbn = get_book_by_isbn(&db, &book.isbn).await?;
        assert_eq!(by_isbn.as_ref().map(|b| b.id), Some(book.id));
        assert_eq!(by_isbn.map(|b| b.title), Some("Test Book".to_string()));
        assert!(get_book_by_isbn(&db, "000-0").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_isbn_rejected() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let result = create_test_book(&db, &book.isbn, book.author_id, book.genre_id).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_book_requires_existing_genre() -> Result<()> {
        let db = setup_test_db().await?;
        let author = create_test_author(&db).await?;
        let result = create_test_book(&db, "978-1", author.id, 999).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_genre_cascades_to_books() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let other_genre = create_genre(&db, "Poetry".to_string()).await?;
        create_test_book(&db, "978-2", book.author_id, other_genre.id).await?;

        delete_genre(&db, book.genre_id).await?;

        assert!(get_book_by_id(&db, book.id).await?.is_none());
        assert_eq!(get_books_for_genre(&db, other_genre.id).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_book_cascades_to_items() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        create_test_book_item(&db, book.id, "BC-1").await?;
        create_test_book_item(&db, book.id, "BC-2").await?;

        delete_book(&db, book.id).await?;

        assert_eq!(BookItem::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_author_cascades_to_books() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        delete_author(&db, book.author_id).await?;
        assert!(get_book_by_id(&db, book.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_genre() -> Result<()> {
        let db = setup_test_db().await?;
        let result = delete_genre(&db, 3).await;
        assert!(matches!(result, Err(Error::NotFound { entity: "Genre", .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_genre_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        create_genre(&db, "Fiction".to_string()).await?;
        assert!(get_genre_by_name(&db, "Fiction").await?.is_some());
        assert!(get_genre_by_name(&db, "fiction").await?.is_none());
        Ok(())
    }
}
