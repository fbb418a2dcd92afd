//! Reservation business logic - Members claiming copies.
//!
//! New reservations start as [`ReservationStatus::Waiting`]. `set_status` writes
//! whatever status it is given.

use crate::{
    entities::{BookReservation, ReservationStatus, book_reservation},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, IntoActiveModel, QueryOrder, Set, prelude::*};

/// Places a waiting reservation for `book_item_id` on behalf of `member_id`.
pub async fn create_reservation<C>(
    db: &C,
    book_item_id: i64,
    member_id: i64,
    reservation_date: Date,
) -> Result<book_reservation::Model>
where
    C: ConnectionTrait,
{
    let reservation = book_reservation::ActiveModel {
        book_item_id: Set(book_item_id),
        member_id: Set(member_id),
        reservation_date: Set(reservation_date),
        status: Set(ReservationStatus::Waiting),
        ..Default::default()
    };
    Ok(reservation.insert(db).await?)
}

/// Finds a reservation by its unique ID.
pub async fn get_reservation_by_id<C>(
    db: &C,
    reservation_id: i64,
) -> Result<Option<book_reservation::Model>>
where
    C: ConnectionTrait,
{
    BookReservation::find_by_id(reservation_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists a member's reservations, newest first.
pub async fn get_reservations_for_member<C>(
    db: &C,
    member_id: i64,
) -> Result<Vec<book_reservation::Model>>
where
    C: ConnectionTrait,
{
    BookReservation::find()
        .filter(book_reservation::Column::MemberId.eq(member_id))
        .order_by_desc(book_reservation::Column::ReservationDate)
        .order_by_desc(book_reservation::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns the most recent reservation placed on a copy, if any.
pub async fn fetch_reservation_details<C>(
    db: &C,
    book_item_id: i64,
) -> Result<Option<book_reservation::Model>>
where
    C: ConnectionTrait,
{
    BookReservation::find()
        .filter(book_reservation::Column::BookItemId.eq(book_item_id))
        .order_by_desc(book_reservation::Column::ReservationDate)
        .order_by_desc(book_reservation::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Overwrites the reservation status.
pub async fn set_status<C>(
    db: &C,
    reservation_id: i64,
    status: ReservationStatus,
) -> Result<book_reservation::Model>
where
    C: ConnectionTrait,
{
    let reservation = BookReservation::find_by_id(reservation_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("BookReservation", reservation_id))?;

    let mut reservation = reservation.into_active_model();
    reservation.status = Set(status);
    Ok(reservation.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_new_reservation_is_waiting() -> Result<()> {
        let (db, member, item) = setup_with_member_and_item().await?;
        let reservation = create_reservation(&db, item.id, member.id, date(2024, 4, 1)).await?;
        assert_eq!(reservation.status, ReservationStatus::Waiting);
        Ok(())
    }

    #[tokio::test]
    async fn test_waiting_may_jump_to_completed() -> Result<()> {
        let (db, member, item) = setup_with_member_and_item().await?;
        let reservation = create_reservation(&db, item.id, member.id, date(2024, 4, 1)).await?;

        let reservation = set_status(&db, reservation.id, ReservationStatus::Completed).await?;
        assert_eq!(reservation.status, ReservationStatus::Completed);

        let stored = get_reservation_by_id(&db, reservation.id).await?;
        assert_eq!(stored.map(|r| r.status), Some(ReservationStatus::Completed));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_latest_reservation_for_item() -> Result<()> {
        let (db, member, item) = setup_with_member_and_item().await?;
        create_reservation(&db, item.id, member.id, date(2024, 4, 1)).await?;
        let latest = create_reservation(&db, item.id, member.id, date(2024, 4, 9)).await?;

        let found = fetch_reservation_details(&db, item.id).await?;
        assert_eq!(found.map(|r| r.id), Some(latest.id));
        assert_eq!(get_reservations_for_member(&db, member.id).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_reservation_requires_member() -> Result<()> {
        let (db, _, item) = setup_with_member_and_item().await?;
        let result = create_reservation(&db, item.id, 404, date(2024, 4, 1)).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[test]
    fn test_none_literal() {
        assert_eq!(ReservationStatus::Unspecified.to_string(), "None");
        assert_eq!(
            "None".parse::<ReservationStatus>().ok(),
            Some(ReservationStatus::Unspecified)
        );
    }
}
