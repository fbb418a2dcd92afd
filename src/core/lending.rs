//! Lending business logic - Loaning copies to members and taking them back.
//!
//! A lending is open while its `return_date` is `NULL`. Lending a copy also
//! checks it out and stamps the due date on it; returning reverses both.

use crate::{
    core::book_item,
    entities::{BookLending, book_lending},
    errors::{Error, Result},
};
use sea_orm::{IntoActiveModel, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Lends a copy to a member. The lending row, the checkout and the copy's due
/// date are written in one database transaction.
pub async fn lend_book(
    db: &DatabaseConnection,
    book_item_id: i64,
    member_id: i64,
    creation_date: Date,
    due_date: Date,
) -> Result<book_lending::Model> {
    let txn = db.begin().await?;

    let lending = book_lending::ActiveModel {
        book_item_id: Set(book_item_id),
        member_id: Set(member_id),
        creation_date: Set(creation_date),
        due_date: Set(due_date),
        return_date: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    book_item::checkout(&txn, book_item_id).await?;
    book_item::set_due_date(&txn, book_item_id, Some(due_date)).await?;

    txn.commit().await?;
    info!(
        "Lent book item {} to member {} until {}",
        book_item_id, member_id, due_date
    );
    Ok(lending)
}

/// Closes a lending by setting its return date and checking the copy back in.
pub async fn return_book(
    db: &DatabaseConnection,
    lending_id: i64,
    return_date: Date,
) -> Result<book_lending::Model> {
    let txn = db.begin().await?;

    let lending = BookLending::find_by_id(lending_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("BookLending", lending_id))?;
    let book_item_id = lending.book_item_id;

    let mut lending = lending.into_active_model();
    lending.return_date = Set(Some(return_date));
    let lending = lending.update(&txn).await?;
    book_item::check_in(&txn, book_item_id).await?;

    txn.commit().await?;
    info!("Book item {} returned on {}", book_item_id, return_date);
    Ok(lending)
}

/// Finds a lending by its unique ID.
pub async fn get_lending_by_id(
    db: &DatabaseConnection,
    lending_id: i64,
) -> Result<Option<book_lending::Model>> {
    BookLending::find_by_id(lending_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists a member's lendings that have not been returned, oldest first.
pub async fn get_open_lendings_for_member(
    db: &DatabaseConnection,
    member_id: i64,
) -> Result<Vec<book_lending::Model>> {
    BookLending::find()
        .filter(book_lending::Column::MemberId.eq(member_id))
        .filter(book_lending::Column::ReturnDate.is_null())
        .order_by_asc(book_lending::Column::CreationDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns the open lending of a copy, if it is out.
pub async fn fetch_lending_details(
    db: &DatabaseConnection,
    book_item_id: i64,
) -> Result<Option<book_lending::Model>> {
    BookLending::find()
        .filter(book_lending::Column::BookItemId.eq(book_item_id))
        .filter(book_lending::Column::ReturnDate.is_null())
        .one(db)
        .await
        .map_err(Into::into)
}
