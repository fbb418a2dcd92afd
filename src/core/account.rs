//! Account business logic - Credentials and standing of a profile.

use crate::{
    entities::{Account, AccountStatus, account},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, IntoActiveModel, Set, prelude::*};
use tracing::info;

/// Opens an active account for a profile. A profile holds at most one account.
pub async fn create_account<C>(db: &C, profile_id: i64, password: String) -> Result<account::Model>
where
    C: ConnectionTrait,
{
    let account = account::ActiveModel {
        profile_id: Set(profile_id),
        password: Set(password),
        status: Set(AccountStatus::Active),
        ..Default::default()
    };
    Ok(account.insert(db).await?)
}

/// Finds an account by its unique ID.
pub async fn get_account_by_id<C>(db: &C, account_id: i64) -> Result<Option<account::Model>>
where
    C: ConnectionTrait,
{
    Account::find_by_id(account_id)
        .one(db)
        .await
        .map_err(Into::into)
}

async fn load<C>(db: &C, account_id: i64) -> Result<account::ActiveModel>
where
    C: ConnectionTrait,
{
    Account::find_by_id(account_id)
        .one(db)
        .await?
        .map(IntoActiveModel::into_active_model)
        .ok_or_else(|| Error::not_found("Account", account_id))
}

/// Replaces the password.
pub async fn reset_password<C>(
    db: &C,
    account_id: i64,
    new_password: String,
) -> Result<account::Model>
where
    C: ConnectionTrait,
{
    let mut account = load(db, account_id).await?;
    account.password = Set(new_password);
    let account = account.update(db).await?;
    info!("Password reset for account {}", account.id);
    Ok(account)
}

/// Overwrites the account status.
pub async fn set_status<C>(
    db: &C,
    account_id: i64,
    status: AccountStatus,
) -> Result<account::Model>
where
    C: ConnectionTrait,
{
    let mut account = load(db, account_id).await?;
    account.status = Set(status);
    Ok(account.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_reset_password() -> Result<()> {
        let db = setup_test_db().await?;
        let profile = profile::register_person(&db, &person("joan")).await?;
        let account = create_account(&db, profile.id, "first".to_string()).await?;

        reset_password(&db, account.id, "second".to_string()).await?;

        let stored = get_account_by_id(&db, account.id).await?;
        assert_eq!(stored.map(|a| a.password), Some("second".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_status() -> Result<()> {
        let db = setup_test_db().await?;
        let profile = profile::register_person(&db, &person("joan")).await?;
        let account = create_account(&db, profile.id, "pw".to_string()).await?;
        assert_eq!(account.status, AccountStatus::Active);

        let account = set_status(&db, account.id, AccountStatus::Blacklisted).await?;
        assert_eq!(account.status, AccountStatus::Blacklisted);
        let account = set_status(&db, account.id, AccountStatus::Active).await?;
        assert_eq!(account.status, AccountStatus::Active);
        Ok(())
    }

    #[tokio::test]
    async fn test_one_account_per_profile() -> Result<()> {
        let db = setup_test_db().await?;
        let profile = profile::register_person(&db, &person("joan")).await?;
        create_account(&db, profile.id, "pw".to_string()).await?;
        let result = create_account(&db, profile.id, "pw2".to_string()).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_reset_missing_account() -> Result<()> {
        let db = setup_test_db().await?;
        let result = reset_password(&db, 3, "x".to_string()).await;
        assert!(matches!(result, Err(Error::NotFound { entity: "Account", .. })));
        Ok(())
    }
}
