/// Database configuration and connection management
pub mod database;

/// Reference data loading from config.toml
pub mod library;
