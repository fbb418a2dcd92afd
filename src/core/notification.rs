//! Notification business logic - Recording messages sent to members.
//!
//! There is no mail or post transport: sending a notification stores it and
//! logs the dispatch.

use crate::{
    entities::{Notification, NotificationChannel, notification},
    errors::Result,
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Stores a notification for `member_id` on the given channel.
#[instrument(skip(db, content))]
pub async fn send_notification<C>(
    db: &C,
    member_id: i64,
    content: String,
    channel: NotificationChannel,
) -> Result<notification::Model>
where
    C: ConnectionTrait,
{
    let kind = channel.kind();
    let (postal_address, email) = match channel {
        NotificationChannel::Postal { address } => (Some(address), None),
        NotificationChannel::Email { email } => (None, Some(email)),
    };

    let notification = notification::ActiveModel {
        member_id: Set(member_id),
        created_on: Set(chrono::Utc::now()),
        content: Set(content),
        kind: Set(kind),
        postal_address: Set(postal_address),
        email: Set(email),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!("{} notification {} queued for member {}", kind, notification.id, member_id);
    Ok(notification)
}

/// Lists a member's notifications, newest first.
pub async fn get_notifications_for_member<C>(
    db: &C,
    member_id: i64,
) -> Result<Vec<notification::Model>>
where
    C: ConnectionTrait,
{
    Notification::find()
        .filter(notification::Column::MemberId.eq(member_id))
        .order_by_desc(notification::Column::CreatedOn)
        .order_by_desc(notification::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
