//! Profile business logic - Creates users and the profiles attached to them.
//!
//! Members and librarians are both built on top of a user + profile pair;
//! [`register_person`] creates that pair in one call.

use crate::{
    entities::{Profile, User, profile, user},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, EntityTrait, ModelTrait, Set, prelude::*};

/// Identity and contact details of a new person
#[derive(Clone, Debug)]
pub struct PersonDetails {
    /// Login name, must be unique
    pub username: String,
    /// Contact email
    pub email: String,
    /// Postal address
    pub address: String,
    /// Phone number
    pub phone: String,
}

/// Creates an active user.
pub async fn register_user<C>(db: &C, username: String, email: String) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let user = user::ActiveModel {
        username: Set(username),
        email: Set(email),
        is_active: Set(true),
        date_joined: Set(chrono::Utc::now()),
        ..Default::default()
    };
    Ok(user.insert(db).await?)
}

/// Attaches a profile to an existing user. A user can hold only one profile.
pub async fn create_profile<C>(
    db: &C,
    user_id: i64,
    address: String,
    phone: String,
) -> Result<profile::Model>
where
    C: ConnectionTrait,
{
    let profile = profile::ActiveModel {
        user_id: Set(user_id),
        address: Set(address),
        phone: Set(phone),
        ..Default::default()
    };
    Ok(profile.insert(db).await?)
}

/// Creates a user and its profile from `details`.
pub async fn register_person<C>(db: &C, details: &PersonDetails) -> Result<profile::Model>
where
    C: ConnectionTrait,
{
    let user = register_user(db, details.username.clone(), details.email.clone()).await?;
    create_profile(db, user.id, details.address.clone(), details.phone.clone()).await
}

/// Finds a profile by its unique ID.
pub async fn get_profile_by_id<C>(db: &C, profile_id: i64) -> Result<Option<profile::Model>>
where
    C: ConnectionTrait,
{
    Profile::find_by_id(profile_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the user behind a profile.
pub async fn get_user_for_profile<C>(db: &C, profile: &profile::Model) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    profile
        .find_related(User)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("User", profile.user_id))
}
