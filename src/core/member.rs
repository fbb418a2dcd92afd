//! Member business logic - Registration, lookup and the checked-out count.
//!
//! A member's checked-out count is derived, never stored: it is the number of
//! their lendings whose `return_date` is still `NULL`.

use crate::{
    core::profile::{self, PersonDetails},
    entities::{BookLending, Member, book_lending, member},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, PaginatorTrait, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Makes an existing profile a member.
pub async fn create_member<C>(
    db: &C,
    profile_id: i64,
    date_of_membership: Date,
) -> Result<member::Model>
where
    C: ConnectionTrait,
{
    let member = member::ActiveModel {
        profile_id: Set(profile_id),
        date_of_membership: Set(date_of_membership),
        ..Default::default()
    };
    Ok(member.insert(db).await?)
}

/// Creates user, profile and member in a single database transaction.
pub async fn register_member(
    db: &DatabaseConnection,
    details: &PersonDetails,
    date_of_membership: Date,
) -> Result<member::Model> {
    let txn = db.begin().await?;
    let profile = profile::register_person(&txn, details).await?;
    let member = create_member(&txn, profile.id, date_of_membership).await?;
    txn.commit().await?;

    info!("Registered member {} ({})", member.id, details.username);
    Ok(member)
}

/// Finds a member by its unique ID.
pub async fn get_member_by_id<C>(db: &C, member_id: i64) -> Result<Option<member::Model>>
where
    C: ConnectionTrait,
{
    Member::find_by_id(member_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts the member's lendings that have not been returned.
pub async fn get_total_checked_out_books<C>(db: &C, member_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    BookLending::find()
        .filter(book_lending::Column::MemberId.eq(member_id))
        .filter(book_lending::Column::ReturnDate.is_null())
        .count(db)
        .await
        .map_err(Into::into)
}

/// Deletes a member together with their reservations, lendings and notifications.
pub async fn delete_member(db: &DatabaseConnection, member_id: i64) -> Result<()> {
    let result = Member::delete_by_id(member_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Member", member_id));
    }
    info!("Deleted member {}", member_id);
    Ok(())
}
