use anyhow::Result;
use teloxide::Bot;

use pnlcard::card::CardRenderer;
use pnlcard::pricing::{CoinGecko, PriceFeed};
use pnlcard::{config, logger, telegram};

#[tokio::main]
async fn main() -> Result<()> {
    // 1) config and logger
    let cfg = config::Config::load()?;
    logger::init(&cfg);

    // 2) Telegram bot
    let bot = Bot::new(&cfg.telegram_token);

    // 3) price feed + ping (the bot keeps working on the fallback price)
    let feed = CoinGecko::new(&cfg.price_api_base_url, &cfg.price_asset_id, &cfg.vs_currency)?;
    if let Err(e) = feed.check_connection().await {
        tracing::warn!("Price API unreachable at startup: {e:#}; fallback price will be used");
    }

    // 4) card renderer
    let renderer = CardRenderer::new(&cfg);

    // 5) run the dispatcher
    telegram::run(bot, feed, renderer).await;
    Ok(())
}
