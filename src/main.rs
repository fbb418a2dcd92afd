use dotenvy::dotenv;
use library_manager::{
    admin,
    config::{database, library},
    core::seed,
    errors::Result,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect and make sure every registered table exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Seed reference data from config.toml
    let config = library::load_default_config()
        .inspect_err(|e| error!("Critical error loading config.toml: {}", e))?;
    seed::seed_reference_data(&db, &config)
        .await
        .inspect_err(|e| error!("Failed to seed reference data: {}", e))?;

    // 5. Report the registered models
    for model in admin::registered_models() {
        debug!("Registered model {} -> table '{}'", model.name, model.table);
    }
    info!(
        "{} models registered and ready.",
        admin::registered_models().len()
    );

    Ok(())
}
