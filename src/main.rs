use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use ecotravel::{AppConfig, RecommendationService, VERSION, logging, web};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var_os("ECOTRAVEL_CONFIG").map(PathBuf::from);
    let config = AppConfig::load_from_path(config_path)?;
    logging::init(&config.logging)?;

    info!(version = VERSION, "starting ecotravel");

    let service = Arc::new(RecommendationService::with_mocks());
    web::run(&config, service).await
}
