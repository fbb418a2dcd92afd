//! Model registration list.
//!
//! Every entity is registered here with its display name, table name and the
//! statement that creates its table. [`crate::config::database::create_tables`]
//! walks this list, and any generic CRUD front end can enumerate it. Parents
//! are registered before the tables that reference them.

use crate::entities::{
    Account, AccountStatus, Author, BarcodeReader, Book, BookFormat, BookItem, BookLending,
    BookReservation, BookStatus, Catalog, Genre, Librarian, Library, LibraryCard, Member,
    Notification, NotificationKind, Profile, Rack, ReservationStatus, Transaction,
    TransactionKind, User, account, book_item, book_reservation, notification, transaction,
};
use sea_orm::sea_query::{Expr, SimpleExpr, TableCreateStatement};
use sea_orm::{ActiveEnum, ColumnTrait, DbBackend, EntityTrait, Schema};

/// One entry of the registration list
#[derive(Clone, Copy, Debug)]
pub struct ModelRegistration {
    /// Display name of the entity (e.g., `"BookItem"`)
    pub name: &'static str,
    /// Table the entity is stored in
    pub table: &'static str,
    create: fn(&Schema) -> TableCreateStatement,
}

impl ModelRegistration {
    /// Builds the `CREATE TABLE IF NOT EXISTS` statement for this model.
    #[must_use]
    pub fn create_statement(&self, schema: &Schema) -> TableCreateStatement {
        let mut statement = (self.create)(schema);
        statement.if_not_exists();
        statement
    }
}

static MODELS: &[ModelRegistration] = &[
    ModelRegistration {
        name: "User",
        table: "users",
        create: plain_table::<User>,
    },
    ModelRegistration {
        name: "Profile",
        table: "profiles",
        create: plain_table::<Profile>,
    },
    ModelRegistration {
        name: "Member",
        table: "members",
        create: plain_table::<Member>,
    },
    ModelRegistration {
        name: "Librarian",
        table: "librarians",
        create: plain_table::<Librarian>,
    },
    ModelRegistration {
        name: "Account",
        table: "accounts",
        create: account_table,
    },
    ModelRegistration {
        name: "Author",
        table: "authors",
        create: plain_table::<Author>,
    },
    ModelRegistration {
        name: "Genre",
        table: "genres",
        create: plain_table::<Genre>,
    },
    ModelRegistration {
        name: "Book",
        table: "books",
        create: plain_table::<Book>,
    },
    ModelRegistration {
        name: "Rack",
        table: "racks",
        create: plain_table::<Rack>,
    },
    ModelRegistration {
        name: "BookItem",
        table: "book_items",
        create: book_item_table,
    },
    ModelRegistration {
        name: "Library",
        table: "libraries",
        create: plain_table::<Library>,
    },
    ModelRegistration {
        name: "LibraryCard",
        table: "library_cards",
        create: plain_table::<LibraryCard>,
    },
    ModelRegistration {
        name: "BookReservation",
        table: "book_reservations",
        create: book_reservation_table,
    },
    ModelRegistration {
        name: "BookLending",
        table: "book_lendings",
        create: plain_table::<BookLending>,
    },
    ModelRegistration {
        name: "Catalog",
        table: "catalogs",
        create: plain_table::<Catalog>,
    },
    ModelRegistration {
        name: "Notification",
        table: "notifications",
        create: notification_table,
    },
    ModelRegistration {
        name: "BarcodeReader",
        table: "barcode_readers",
        create: plain_table::<BarcodeReader>,
    },
    ModelRegistration {
        name: "Transaction",
        table: "transactions",
        create: transaction_table,
    },
];

/// Returns every registered model, parents first.
#[must_use]
pub fn registered_models() -> &'static [ModelRegistration] {
    MODELS
}

/// Looks up a registration by its display name.
#[must_use]
pub fn find_model(name: &str) -> Option<&'static ModelRegistration> {
    MODELS.iter().find(|model| model.name == name)
}

/// Renders the `CREATE TABLE` statements of all registered models for `backend`.
#[must_use]
pub fn schema_sql(backend: DbBackend) -> Vec<String> {
    let schema = Schema::new(backend);
    MODELS
        .iter()
        .map(|model| backend.build(&model.create_statement(&schema)).to_string())
        .collect()
}

fn plain_table<E: EntityTrait>(schema: &Schema) -> TableCreateStatement {
    schema.create_table_from_entity(E::default())
}

/// `CHECK (column IN (...))` over every literal of `A`.
fn literal_check<C, A>(column: C) -> SimpleExpr
where
    C: ColumnTrait + 'static,
    A: ActiveEnum<Value = String>,
{
    Expr::col(column).is_in(A::values())
}

fn book_item_table(schema: &Schema) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(BookItem);
    table
        .check(literal_check::<_, BookFormat>(book_item::Column::Format))
        .check(literal_check::<_, BookStatus>(book_item::Column::Status));
    table
}

fn book_reservation_table(schema: &Schema) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(BookReservation);
    table.check(literal_check::<_, ReservationStatus>(
        book_reservation::Column::Status,
    ));
    table
}

fn account_table(schema: &Schema) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(Account);
    table.check(literal_check::<_, AccountStatus>(account::Column::Status));
    table
}

fn notification_table(schema: &Schema) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(Notification);
    table.check(literal_check::<_, NotificationKind>(
        notification::Column::Kind,
    ));
    table
}

fn transaction_table(schema: &Schema) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(Transaction);
    table.check(literal_check::<_, TransactionKind>(transaction::Column::Kind));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityName;
    use std::collections::HashSet;

    #[test]
    fn test_every_entity_is_registered_once() {
        let names: HashSet<&str> = registered_models().iter().map(|m| m.name).collect();
        assert_eq!(names.len(), 18);
        assert_eq!(registered_models().len(), 18);
        for expected in [
            "Book",
            "Genre",
            "Librarian",
            "Member",
            "BookItem",
            "LibraryCard",
            "BookReservation",
            "BookLending",
            "Notification",
            "Transaction",
        ] {
            assert!(find_model(expected).is_some(), "{expected} missing");
        }
        assert!(find_model("Patron").is_none());
    }

    #[test]
    fn test_table_names_match_entities() {
        let expected = [
            ("User", User.table_name()),
            ("Profile", Profile.table_name()),
            ("Member", Member.table_name()),
            ("Librarian", Librarian.table_name()),
            ("Account", Account.table_name()),
            ("Author", Author.table_name()),
            ("Genre", Genre.table_name()),
            ("Book", Book.table_name()),
            ("Rack", Rack.table_name()),
            ("BookItem", BookItem.table_name()),
            ("Library", Library.table_name()),
            ("LibraryCard", LibraryCard.table_name()),
            ("BookReservation", BookReservation.table_name()),
            ("BookLending", BookLending.table_name()),
            ("Catalog", Catalog.table_name()),
            ("Notification", Notification.table_name()),
            ("BarcodeReader", BarcodeReader.table_name()),
            ("Transaction", Transaction.table_name()),
        ];
        for (name, table) in expected {
            assert_eq!(find_model(name).map(|m| m.table), Some(table));
        }
    }

    #[test]
    fn test_parents_registered_before_children() {
        let position = |name: &str| {
            registered_models()
                .iter()
                .position(|m| m.name == name)
                .unwrap_or(usize::MAX)
        };
        assert!(position("Genre") < position("Book"));
        assert!(position("Book") < position("BookItem"));
        assert!(position("Member") < position("BookLending"));
        assert!(position("User") < position("Profile"));
    }

    #[test]
    fn test_schema_sql_carries_constraints() {
        let sql = schema_sql(DbBackend::Sqlite).join("\n");
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"book_items\""));
        assert!(sql.contains("'Hardcover'"));
        assert!(sql.contains("'Blacklisted'"));
        assert!(sql.contains("ON DELETE CASCADE"));
        assert!(sql.contains("UNIQUE"));
    }
}
