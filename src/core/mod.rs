//! Core business logic - framework-agnostic operations over the library schema.
//!
//! Every function takes a database connection (or transaction) and returns the
//! affected model. Operations are direct field reads and writes; constraint
//! enforcement is left to the schema.

/// Accounts: creation, password reset and status
pub mod account;
/// Authors, genres and books
pub mod book;
/// Copies of books and their circulation fields
pub mod book_item;
/// Catalog indexes and searches
pub mod catalog;
/// Lending and returning copies
pub mod lending;
/// Librarian registration and member blocking
pub mod librarian;
/// Library branches, racks, cards and barcode readers
pub mod library;
/// Member registration and checked-out counts
pub mod member;
/// Member notifications
pub mod notification;
/// Users and profiles
pub mod profile;
/// Reservations of copies
pub mod reservation;
/// Reference data seeding
pub mod seed;
/// Fines and payments
pub mod transaction;
