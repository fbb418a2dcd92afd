//! Seeding of reference data from `config.toml`.
//!
//! Existing rows are matched by library name, genre name and rack number and
//! skipped, so seeding can run on every start.

use crate::{
    config::library::Config,
    core::{book, library},
    errors::Result,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument, warn};

/// Number of rows each seeding run created
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Library branches created
    pub libraries: usize,
    /// Genres created
    pub genres: usize,
    /// Racks created
    pub racks: usize,
}

/// Creates the library, genres and racks listed in `config` that do not exist yet.
#[instrument(skip(db, config))]
pub async fn seed_reference_data(db: &DatabaseConnection, config: &Config) -> Result<SeedSummary> {
    info!(
        "Seeding reference data: {} genres, {} racks from config.",
        config.genres.len(),
        config.racks.len()
    );
    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    if let Some(cfg) = &config.library {
        if library::get_library_by_name(&txn, &cfg.name).await?.is_some() {
            warn!("Library '{}' already exists. Skipping.", cfg.name);
        } else {
            library::create_library(&txn, cfg.name.clone(), cfg.address.clone()).await?;
            summary.libraries += 1;
        }
    }

    for cfg in &config.genres {
        if book::get_genre_by_name(&txn, &cfg.name).await?.is_some() {
            debug!("Genre '{}' already exists. Skipping.", cfg.name);
            continue;
        }
        book::create_genre(&txn, cfg.name.clone()).await?;
        summary.genres += 1;
    }

    for cfg in &config.racks {
        if library::get_rack_by_number(&txn, cfg.number).await?.is_some() {
            debug!("Rack {} already exists. Skipping.", cfg.number);
            continue;
        }
        library::create_rack(&txn, cfg.number, cfg.location.clone()).await?;
        summary.racks += 1;
    }

    txn.commit().await?;
    info!(
        "Seeding complete: {} libraries, {} genres, {} racks created.",
        summary.libraries, summary.genres, summary.racks
    );
    Ok(summary)
}
