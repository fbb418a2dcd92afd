//! Notification entity - A message addressed to a member, by post or by email.
//!
//! Both channels share one table. `kind` is the discriminator and exactly one
//! of `postal_address` / `email` carries the channel payload. Use
//! [`Model::channel`] to read the pair back as a [`NotificationChannel`].

use crate::errors::Error;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discriminator for the notification channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum NotificationKind {
    #[sea_orm(string_value = "Postal")]
    Postal,
    #[sea_orm(string_value = "Email")]
    Email,
}

super::impl_literal!(NotificationKind, "notification kind");

/// Where a notification is delivered
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NotificationChannel {
    /// Letter sent to a postal address
    Postal {
        /// Destination address
        address: String,
    },
    /// Message sent to an email address
    Email {
        /// Destination mailbox
        email: String,
    },
}

impl NotificationChannel {
    /// Discriminator stored in the `kind` column.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::Postal { .. } => NotificationKind::Postal,
            Self::Email { .. } => NotificationKind::Email,
        }
    }
}

/// Notification database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    /// Unique identifier for the notification
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Recipient
    pub member_id: i64,
    /// When the notification was created
    pub created_on: DateTimeUtc,
    /// Message body
    pub content: String,
    /// Channel discriminator
    pub kind: NotificationKind,
    /// Payload for [`NotificationKind::Postal`]
    pub postal_address: Option<String>,
    /// Payload for [`NotificationKind::Email`]
    pub email: Option<String>,
}

impl Model {
    /// Reassembles the channel from the discriminator and its payload column.
    ///
    /// Fails with [`Error::InvalidValue`] when the payload column for `kind` is empty.
    pub fn channel(&self) -> crate::errors::Result<NotificationChannel> {
        let missing = |field: &'static str| Error::InvalidValue {
            field,
            value: "NULL".to_string(),
        };
        match self.kind {
            NotificationKind::Postal => self
                .postal_address
                .clone()
                .map(|address| NotificationChannel::Postal { address })
                .ok_or_else(|| missing("postal_address")),
            NotificationKind::Email => self
                .email
                .clone()
                .map(|email| NotificationChannel::Email { email })
                .ok_or_else(|| missing("email")),
        }
    }
}

/// Defines relationships between Notification and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each notification is addressed to one member
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
