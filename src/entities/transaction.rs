//! Transaction entity - A payment recorded by the library.
//!
//! Fines and the three payment methods share one table. `kind` is the
//! discriminator and the nullable columns after it carry the payload of the
//! matching variant. [`Model::payment`] reassembles them into a [`Payment`].
//! Fines carry no payload.

use crate::errors::Error;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discriminator for the transaction subtype
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransactionKind {
    #[sea_orm(string_value = "Fine")]
    Fine,
    #[sea_orm(string_value = "CreditCard")]
    CreditCard,
    #[sea_orm(string_value = "Check")]
    Check,
    #[sea_orm(string_value = "Cash")]
    Cash,
}

super::impl_literal!(TransactionKind, "transaction kind");

/// Subtype-specific data of a transaction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Payment {
    /// Fine charged to a member
    Fine,
    /// Card payment
    CreditCard {
        /// Cardholder name
        name_on_card: String,
    },
    /// Payment by check
    Check {
        /// Issuing bank
        bank_name: String,
        /// Check number
        check_number: String,
    },
    /// Payment in cash
    Cash {
        /// Amount handed over, before change
        cash_tendered: f64,
    },
}

impl Payment {
    /// Discriminator stored in the `kind` column.
    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        match self {
            Self::Fine => TransactionKind::Fine,
            Self::CreditCard { .. } => TransactionKind::CreditCard,
            Self::Check { .. } => TransactionKind::Check,
            Self::Cash { .. } => TransactionKind::Cash,
        }
    }
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Subtype discriminator
    pub kind: TransactionKind,
    /// When the transaction was recorded
    pub creation_date: DateTimeUtc,
    /// Transaction amount in dollars
    pub amount: f64,
    /// `CreditCard` payload
    pub name_on_card: Option<String>,
    /// `Check` payload
    pub bank_name: Option<String>,
    /// `Check` payload
    pub check_number: Option<String>,
    /// `Cash` payload
    pub cash_tendered: Option<f64>,
}

impl Model {
    /// Returns the transaction amount.
    #[must_use]
    pub const fn get_amount(&self) -> f64 {
        self.amount
    }

    /// Reassembles the subtype payload from its columns.
    ///
    /// Fails with [`Error::InvalidValue`] naming the first empty payload column.
    pub fn payment(&self) -> crate::errors::Result<Payment> {
        fn required<T: Clone>(
            field: &'static str,
            value: Option<&T>,
        ) -> crate::errors::Result<T> {
            value.cloned().ok_or_else(|| Error::InvalidValue {
                field,
                value: "NULL".to_string(),
            })
        }

        Ok(match self.kind {
            TransactionKind::Fine => Payment::Fine,
            TransactionKind::CreditCard => Payment::CreditCard {
                name_on_card: required("name_on_card", self.name_on_card.as_ref())?,
            },
            TransactionKind::Check => Payment::Check {
                bank_name: required("bank_name", self.bank_name.as_ref())?,
                check_number: required("check_number", self.check_number.as_ref())?,
            },
            TransactionKind::Cash => Payment::Cash {
                cash_tendered: required("cash_tendered", self.cash_tendered.as_ref())?,
            },
        })
    }
}

/// `Transaction` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
