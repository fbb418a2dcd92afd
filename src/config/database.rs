//! Database configuration module for the library manager.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions through the registration list in
//! [`crate::admin`], so the schema (columns, unique constraints, foreign keys with their
//! cascade rules, enum `CHECK` constraints) always matches the Rust structs.

use crate::admin::registered_models;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/library.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens a connection to `url`. On `SQLite`, foreign key enforcement is switched on
/// so cascading deletes take effect.
pub async fn connect(url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection to: {}", url);
    let db = Database::connect(url).await?;
    if db.get_database_backend() == DatabaseBackend::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    }
    Ok(db)
}

/// Establishes a connection to the database named by the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    connect(&get_database_url()).await
}

/// Creates every registered table that does not exist yet.
///
/// Tables are created in registration order, parents before children.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    for model in registered_models() {
        debug!("Ensuring table '{}' for {}", model.table, model.name);
        db.execute(builder.build(&model.create_statement(&schema)))
            .await?;
    }

    info!("Database tables ensured ({} models).", registered_models().len());
    Ok(())
}
