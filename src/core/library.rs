//! Library business logic - Branches, racks, library cards and barcode readers.

use crate::{
    entities::{
        BarcodeReader, Library, LibraryCard, Rack, barcode_reader, library, library_card, rack,
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, IntoActiveModel, Set, prelude::*};
use tracing::info;

/// Creates a library branch.
pub async fn create_library<C>(db: &C, name: String, address: String) -> Result<library::Model>
where
    C: ConnectionTrait,
{
    let library = library::ActiveModel {
        name: Set(name),
        address: Set(address),
        ..Default::default()
    };
    Ok(library.insert(db).await?)
}

/// Finds a library branch by exact name.
pub async fn get_library_by_name<C>(db: &C, name: &str) -> Result<Option<library::Model>>
where
    C: ConnectionTrait,
{
    Library::find()
        .filter(library::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a rack.
pub async fn create_rack<C>(db: &C, number: i32, location: String) -> Result<rack::Model>
where
    C: ConnectionTrait,
{
    let rack = rack::ActiveModel {
        number: Set(number),
        location: Set(location),
        ..Default::default()
    };
    Ok(rack.insert(db).await?)
}

/// Finds a rack by its number.
pub async fn get_rack_by_number<C>(db: &C, number: i32) -> Result<Option<rack::Model>>
where
    C: ConnectionTrait,
{
    Rack::find()
        .filter(rack::Column::Number.eq(number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes a rack. Copies shelved on it keep existing with no rack.
pub async fn delete_rack<C>(db: &C, rack_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Rack::delete_by_id(rack_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Rack", rack_id));
    }
    Ok(())
}

/// Issues an active library card. Card numbers are unique.
pub async fn issue_card<C>(db: &C, card_number: String) -> Result<library_card::Model>
where
    C: ConnectionTrait,
{
    let card = library_card::ActiveModel {
        card_number: Set(card_number),
        issued_at: Set(chrono::Utc::now()),
        active: Set(true),
        ..Default::default()
    };
    let card = card.insert(db).await?;
    info!("Issued library card {}", card.card_number);
    Ok(card)
}

/// Finds a library card by its number.
pub async fn get_card_by_number<C>(
    db: &C,
    card_number: &str,
) -> Result<Option<library_card::Model>>
where
    C: ConnectionTrait,
{
    LibraryCard::find()
        .filter(library_card::Column::CardNumber.eq(card_number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Marks a library card inactive.
pub async fn deactivate_card<C>(db: &C, card_id: i64) -> Result<library_card::Model>
where
    C: ConnectionTrait,
{
    let card = LibraryCard::find_by_id(card_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("LibraryCard", card_id))?;

    let mut card = card.into_active_model();
    card.active = Set(false);
    Ok(card.update(db).await?)
}

/// Registers an active barcode reader. Reader barcodes are unique.
pub async fn register_reader<C>(db: &C, barcode: String) -> Result<barcode_reader::Model>
where
    C: ConnectionTrait,
{
    let reader = barcode_reader::ActiveModel {
        barcode: Set(barcode),
        registered_at: Set(chrono::Utc::now()),
        active: Set(true),
        ..Default::default()
    };
    Ok(reader.insert(db).await?)
}

/// Finds a barcode reader by its barcode.
pub async fn get_reader_by_barcode<C>(
    db: &C,
    barcode: &str,
) -> Result<Option<barcode_reader::Model>>
where
    C: ConnectionTrait,
{
    BarcodeReader::find()
        .filter(barcode_reader::Column::Barcode.eq(barcode))
        .one(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::book_item;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_issue_card() -> Result<()> {
        let db = setup_test_db().await?;
        let card = issue_card(&db, "LC-100".to_string()).await?;
        assert!(card.active);

        let found = get_card_by_number(&db, "LC-100").await?;
        assert_eq!(found.map(|c| c.id), Some(card.id));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_card_number_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        issue_card(&db, "LC-100".to_string()).await?;
        let result = issue_card(&db, "LC-100".to_string()).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_card() -> Result<()> {
        let db = setup_test_db().await?;
        let card = issue_card(&db, "LC-7".to_string()).await?;
        let card = deactivate_card(&db, card.id).await?;
        assert!(!card.active);
        assert!(matches!(
            deactivate_card(&db, 999).await,
            Err(Error::NotFound { entity: "LibraryCard", .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_reader_barcode_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        register_reader(&db, "RD-1".to_string()).await?;
        assert!(get_reader_by_barcode(&db, "RD-1").await?.is_some());
        let result = register_reader(&db, "RD-1".to_string()).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_rack_clears_item_rack() -> Result<()> {
        let (db, book) = setup_with_book().await?;
        let rack = create_rack(&db, 4, "Basement".to_string()).await?;
        let mut new_item = test_book_item(book.id, "BC-R");
        new_item.rack_id = Some(rack.id);
        let item = book_item::create_book_item(&db, new_item).await?;
        assert_eq!(item.rack_id, Some(rack.id));

        delete_rack(&db, rack.id).await?;

        let item = book_item::get_book_item_by_barcode(&db, "BC-R").await?;
        assert_eq!(item.map(|i| i.rack_id), Some(None));
        Ok(())
    }

    #[tokio::test]
    async fn test_library_lookup() -> Result<()> {
        let db = setup_test_db().await?;
        create_library(&db, "Central".to_string(), "1 Main St".to_string()).await?;
        let found = get_library_by_name(&db, "Central").await?;
        assert_eq!(found.map(|l| l.address), Some("1 Main St".to_string()));
        assert!(get_rack_by_number(&db, 1).await?.is_none());
        Ok(())
    }
}
