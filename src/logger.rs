// src/logger.rs

use crate::config::Config;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

/// Logging setup via tracing
pub fn init(cfg: &Config) {
    // Level comes from RUST_LOG, otherwise INFO
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!(
        "Logger initialized. Price asset = {}, vs = {}",
        cfg.price_asset_id,
        cfg.vs_currency
    );
}
