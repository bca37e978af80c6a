// src/config.rs
use anyhow::Result;
use config::{Config as Loader, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_token: String,

    // Price API
    #[serde(default = "default_price_api_base_url")]
    pub price_api_base_url: String,

    #[serde(default = "default_price_asset_id")]
    pub price_asset_id: String, // CoinGecko asset id, e.g. "solana"

    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,

    // Card rendering
    #[serde(default = "default_backgrounds_dir")]
    pub backgrounds_dir: String,

    #[serde(default)]
    pub font_path: Option<String>, // tried before the embedded font

    #[serde(default = "default_card_width")]
    pub card_width: u32,

    #[serde(default = "default_card_height")]
    pub card_height: u32,
}

fn default_price_api_base_url() -> String { "https://api.coingecko.com/api/v3".into() }
fn default_price_asset_id() -> String { "solana".into() }
fn default_vs_currency() -> String { "usd".into() }
fn default_backgrounds_dir() -> String { "backgrounds".into() }
fn default_card_width() -> u32 { 1188 }
fn default_card_height() -> u32 { 668 }

impl Config {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let file = env::var("PNLCARD_CONFIG").unwrap_or_else(|_| "Config.toml".into());
        let loader = Loader::builder()
            .add_source(File::with_name(&file).required(false))
            .add_source(Environment::with_prefix("PNLCARD").separator("__"))
            .build()?;
        Ok(loader.try_deserialize()?)
    }
}
