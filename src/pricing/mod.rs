mod coingecko;

pub use self::coingecko::CoinGecko;

use async_trait::async_trait;
use tracing::warn;

/// Quote used whenever the price endpoint cannot be reached or parsed.
pub const FALLBACK_PRICE: f64 = 100.0;

#[async_trait]
pub trait PriceFeed {
    async fn check_connection(&self) -> anyhow::Result<()>;
    async fn spot_price(&self) -> anyhow::Result<f64>;
}

/// One attempt, no retry: any failure is logged and replaced by the constant.
pub async fn price_or_fallback<F>(feed: &F) -> f64
where
    F: PriceFeed + Sync + ?Sized,
{
    match feed.spot_price().await {
        Ok(price) => price,
        Err(e) => {
            warn!("Price fetch failed: {e:#}; using fallback {FALLBACK_PRICE}");
            FALLBACK_PRICE
        }
    }
}
