//! Entity module - Contains all `SeaORM` entity definitions for the library schema.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

/// Implements `Display` and `FromStr` for a string-backed `DeriveActiveEnum`,
/// using the stored literal as the textual form.
macro_rules! impl_literal {
    ($enum:ty, $field:literal) => {
        impl ::std::fmt::Display for $enum {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&::sea_orm::ActiveEnum::to_value(self))
            }
        }

        impl ::std::str::FromStr for $enum {
            type Err = crate::errors::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as ::sea_orm::ActiveEnum>::try_from_value(&s.to_string()).map_err(|_| {
                    crate::errors::Error::InvalidValue {
                        field: $field,
                        value: s.to_string(),
                    }
                })
            }
        }
    };
}
pub(crate) use impl_literal;

pub mod account;
pub mod author;
pub mod barcode_reader;
pub mod book;
pub mod book_item;
pub mod book_lending;
pub mod book_reservation;
pub mod catalog;
pub mod genre;
pub mod librarian;
pub mod library;
pub mod library_card;
pub mod member;
pub mod notification;
pub mod profile;
pub mod rack;
pub mod transaction;
pub mod user;

// Re-export specific types to avoid conflicts
pub use account::{AccountStatus, Entity as Account, Model as AccountModel};
pub use author::{Entity as Author, Model as AuthorModel};
pub use barcode_reader::{Entity as BarcodeReader, Model as BarcodeReaderModel};
pub use book::{Entity as Book, Model as BookModel};
pub use book_item::{BookFormat, BookStatus, Entity as BookItem, Model as BookItemModel};
pub use book_lending::{Entity as BookLending, Model as BookLendingModel};
pub use book_reservation::{
    Entity as BookReservation, Model as BookReservationModel, ReservationStatus,
};
pub use catalog::{Entity as Catalog, Model as CatalogModel};
pub use genre::{Entity as Genre, Model as GenreModel};
pub use librarian::{Entity as Librarian, Model as LibrarianModel};
pub use library::{Entity as Library, Model as LibraryModel};
pub use library_card::{Entity as LibraryCard, Model as LibraryCardModel};
pub use member::{Entity as Member, Model as MemberModel};
pub use notification::{
    Entity as Notification, Model as NotificationModel, NotificationChannel, NotificationKind,
};
pub use profile::{Entity as Profile, Model as ProfileModel};
pub use rack::{Entity as Rack, Model as RackModel};
pub use transaction::{Entity as Transaction, Model as TransactionModel, Payment, TransactionKind};
pub use user::{Entity as User, Model as UserModel};
