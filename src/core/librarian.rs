//! Librarian business logic - Staff registration and member blocking.
//!
//! Blocking a member clears `is_active` on the user behind the member's
//! profile; unblocking sets it again. Nothing else about the member changes.

use crate::{
    core::profile::{self, PersonDetails},
    entities::{Member, Profile, librarian, user},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, IntoActiveModel, ModelTrait, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Makes an existing profile a librarian.
pub async fn create_librarian<C>(db: &C, profile_id: i64) -> Result<librarian::Model>
where
    C: ConnectionTrait,
{
    let librarian = librarian::ActiveModel {
        profile_id: Set(profile_id),
        ..Default::default()
    };
    Ok(librarian.insert(db).await?)
}

/// Creates user, profile and librarian in a single database transaction.
pub async fn register_librarian(
    db: &DatabaseConnection,
    details: &PersonDetails,
) -> Result<librarian::Model> {
    let txn = db.begin().await?;
    let profile = profile::register_person(&txn, details).await?;
    let librarian = create_librarian(&txn, profile.id).await?;
    txn.commit().await?;
    Ok(librarian)
}

/// Denies the member's user access by clearing its active flag.
pub async fn block_member<C>(db: &C, member_id: i64) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let user = set_member_active(db, member_id, false).await?;
    info!("Blocked member {} (user '{}')", member_id, user.username);
    Ok(user)
}

/// Restores the member's user access by setting its active flag.
pub async fn unblock_member<C>(db: &C, member_id: i64) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let user = set_member_active(db, member_id, true).await?;
    info!("Unblocked member {} (user '{}')", member_id, user.username);
    Ok(user)
}

async fn set_member_active<C>(db: &C, member_id: i64, active: bool) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let member = Member::find_by_id(member_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Member", member_id))?;
    let profile = member
        .find_related(Profile)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Profile", member.profile_id))?;
    let user = profile::get_user_for_profile(db, &profile).await?;

    let mut user = user.into_active_model();
    user.is_active = Set(active);
    Ok(user.update(db).await?)
}
