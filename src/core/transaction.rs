//! Transaction business logic - Recording fines and payments.
//!
//! The [`Payment`] variant decides the `kind` column and which payload columns
//! are filled; the rest stay `NULL`.

use crate::{
    entities::{Payment, Transaction, TransactionKind, transaction},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Records a transaction of `amount` with the given payment details.
pub async fn create_transaction<C>(
    db: &C,
    amount: f64,
    payment: Payment,
) -> Result<transaction::Model>
where
    C: ConnectionTrait,
{
    if !amount.is_finite() {
        return Err(Error::InvalidValue {
            field: "amount",
            value: amount.to_string(),
        });
    }

    let mut model = transaction::ActiveModel {
        kind: Set(payment.kind()),
        creation_date: Set(chrono::Utc::now()),
        amount: Set(amount),
        name_on_card: Set(None),
        bank_name: Set(None),
        check_number: Set(None),
        cash_tendered: Set(None),
        ..Default::default()
    };
    match payment {
        Payment::Fine => {}
        Payment::CreditCard { name_on_card } => model.name_on_card = Set(Some(name_on_card)),
        Payment::Check {
            bank_name,
            check_number,
        } => {
            model.bank_name = Set(Some(bank_name));
            model.check_number = Set(Some(check_number));
        }
        Payment::Cash { cash_tendered } => model.cash_tendered = Set(Some(cash_tendered)),
    }

    let model = model.insert(db).await?;
    info!("Recorded {} transaction {} of {:.2}", model.kind, model.id, amount);
    Ok(model)
}

/// Finds a transaction by its unique ID.
pub async fn get_transaction_by_id<C>(
    db: &C,
    transaction_id: i64,
) -> Result<Option<transaction::Model>>
where
    C: ConnectionTrait,
{
    Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists transactions of one kind, newest first.
pub async fn get_transactions_by_kind<C>(
    db: &C,
    kind: TransactionKind,
) -> Result<Vec<transaction::Model>>
where
    C: ConnectionTrait,
{
    Transaction::find()
        .filter(transaction::Column::Kind.eq(kind))
        .order_by_desc(transaction::Column::CreationDate)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_get_amount() -> Result<()> {
        let db = setup_test_db().await?;
        let fine = create_transaction(&db, 2.5, Payment::Fine).await?;
        assert_eq!(fine.get_amount(), 2.5);
        assert_eq!(fine.payment()?, Payment::Fine);
        Ok(())
    }

    #[tokio::test]
    async fn test_payload_round_trips_through_columns() -> Result<()> {
        let db = setup_test_db().await?;
        let check = Payment::Check {
            bank_name: "First Bank".to_string(),
            check_number: "000123".to_string(),
        };
        let stored = create_transaction(&db, 40.0, check.clone()).await?;
        let loaded = get_transaction_by_id(&db, stored.id)
            .await?
            .ok_or_else(|| Error::not_found("Transaction", stored.id))?;

        assert_eq!(loaded.kind, TransactionKind::Check);
        assert!(loaded.name_on_card.is_none());
        assert!(loaded.cash_tendered.is_none());
        assert_eq!(loaded.payment()?, check);
        Ok(())
    }

    #[tokio::test]
    async fn test_filter_by_kind() -> Result<()> {
        let db = setup_test_db().await?;
        create_transaction(&db, 5.0, Payment::Cash { cash_tendered: 10.0 }).await?;
        create_transaction(
            &db,
            12.0,
            Payment::CreditCard {
                name_on_card: "A. Lovelace".to_string(),
            },
        )
        .await?;
        create_transaction(&db, 1.0, Payment::Fine).await?;

        let cash = get_transactions_by_kind(&db, TransactionKind::Cash).await?;
        assert_eq!(cash.len(), 1);
        assert_eq!(cash[0].payment()?, Payment::Cash { cash_tendered: 10.0 });
        Ok(())
    }

    #[tokio::test]
    async fn test_non_finite_amount_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let result = create_transaction(&db, f64::NAN, Payment::Fine).await;
        assert!(matches!(result, Err(Error::InvalidValue { field: "amount", .. })));
        Ok(())
    }

    #[test]
    fn test_missing_payload_column() {
        let model = transaction::Model {
            id: 1,
            kind: TransactionKind::CreditCard,
            creation_date: chrono::Utc::now(),
            amount: 3.0,
            name_on_card: None,
            bank_name: None,
            check_number: None,
            cash_tendered: None,
        };
        assert!(matches!(
            model.payment(),
            Err(Error::InvalidValue { field: "name_on_card", .. })
        ));
    }
}
