//! Reference data loading from config.toml
//!
//! This module loads the branch, genres and racks a fresh installation starts
//! with. The entries are used to seed the database on first run; rows that
//! already exist are left alone.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// The library branch, if one should be created
    pub library: Option<LibraryConfig>,
    /// Genres to seed
    #[serde(default)]
    pub genres: Vec<GenreConfig>,
    /// Racks to seed
    #[serde(default)]
    pub racks: Vec<RackConfig>,
}

/// Name and address of the branch
#[derive(Debug, Deserialize, Clone)]
pub struct LibraryConfig {
    /// Branch name
    pub name: String,
    /// Street address
    pub address: String,
}

/// A genre to seed
#[derive(Debug, Deserialize, Clone)]
pub struct GenreConfig {
    /// Genre name, matched exactly when checking for an existing row
    pub name: String,
}

/// A rack to seed
#[derive(Debug, Deserialize, Clone)]
pub struct RackConfig {
    /// Rack number, matched exactly when checking for an existing row
    pub number: i32,
    /// Where the rack stands
    pub location: String,
}

/// Loads reference data from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads reference data from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
