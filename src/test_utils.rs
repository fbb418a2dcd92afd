//! Shared test utilities for the library manager.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        book::{self, NewBook},
        book_item::{self, NewBookItem},
        member,
        profile::PersonDetails,
    },
    entities::{self, BookFormat, BookStatus},
    errors::Result,
};
use sea_orm::{DatabaseConnection, prelude::Date};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a calendar date; out-of-range input falls back to the epoch default.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Person details derived from `username`.
#[must_use]
pub fn person(username: &str) -> PersonDetails {
    PersonDetails {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        address: "1 Test Street".to_string(),
        phone: "555-0100".to_string(),
    }
}

/// Registers a member with membership starting 2024-01-01.
pub async fn create_test_member(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::member::Model> {
    member::register_member(db, &person(username), date(2024, 1, 1)).await
}

/// Creates the author "Test Author".
pub async fn create_test_author(db: &DatabaseConnection) -> Result<entities::author::Model> {
    book::create_author(db, "Test Author".to_string(), "Writes tests".to_string()).await
}

/// Creates a book with the given ISBN.
///
/// # Defaults
/// * `title`: "Test Book"
/// * `subject`: "Testing"
/// * `number_of_pages`: 200
pub async fn create_test_book(
    db: &DatabaseConnection,
    isbn: &str,
    author_id: i64,
    genre_id: i64,
) -> Result<entities::book::Model> {
    book::create_book(
        db,
        NewBook {
            isbn: isbn.to_string(),
            title: "Test Book".to_string(),
            subject: "Testing".to_string(),
            publisher: "Test Press".to_string(),
            language: "English".to_string(),
            number_of_pages: 200,
            author_id,
            genre_id,
        },
    )
    .await
}

/// Copy data with sensible defaults.
///
/// # Defaults
/// * `format`: Hardcover
/// * `status`: Available
/// * `price`: 25.0
/// * `publication_date`: 2020-06-01
#[must_use]
pub fn test_book_item(book_id: i64, barcode: &str) -> NewBookItem {
    NewBookItem {
        book_id,
        barcode: barcode.to_string(),
        is_reference_only: false,
        price: 25.0,
        format: BookFormat::Hardcover,
        status: BookStatus::Available,
        date_of_purchase: date(2023, 9, 1),
        publication_date: date(2020, 6, 1),
        rack_id: None,
    }
}

/// Creates a copy of `book_id` with [`test_book_item`] defaults.
pub async fn create_test_book_item(
    db: &DatabaseConnection,
    book_id: i64,
    barcode: &str,
) -> Result<entities::book_item::Model> {
    book_item::create_book_item(db, test_book_item(book_id, barcode)).await
}

/// Sets up a database holding one author, one genre and one book.
/// Returns (db, book).
pub async fn setup_with_book() -> Result<(DatabaseConnection, entities::book::Model)> {
    let db = setup_test_db().await?;
    let author = create_test_author(&db).await?;
    let genre = book::create_genre(&db, "Fiction".to_string()).await?;
    let book = create_test_book(&db, "978-0-00-000001-3", author.id, genre.id).await?;
    Ok((db, book))
}

/// Sets up a database with one member and one copy of a book.
/// Returns (db, member, item) for lending and reservation tests.
pub async fn setup_with_member_and_item() -> Result<(
    DatabaseConnection,
    entities::member::Model,
    entities::book_item::Model,
)> {
    let (db, book) = setup_with_book().await?;
    let member = create_test_member(&db, "grace").await?;
    let item = create_test_book_item(&db, book.id, "BC-0001").await?;
    Ok((db, member, item))
}
