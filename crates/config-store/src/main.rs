//! Configuration Store - Main Entry Point

use config_store::{init_logging, run_server, StoreSettings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== DM Configuration Store v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = StoreSettings::load()?;
    run_server(&settings).await?;

    Ok(())
}
