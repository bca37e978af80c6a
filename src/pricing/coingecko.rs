// src/pricing/coingecko.rs

use super::PriceFeed;
use anyhow::{Result, anyhow};
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// CoinGecko simple-price client
#[derive(Debug, Clone)]
pub struct CoinGecko {
    client: Client,
    base_url: Url,
    asset_id: String,
    vs_currency: String,
}

impl CoinGecko {
    /// `base_url` with or without a trailing `/`
    pub fn new(base_url: &str, asset_id: &str, vs_currency: &str) -> Result<Self> {
        // Url::join drops the last path segment without the trailing slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| anyhow!("Invalid price API URL `{}`: {}", normalized, e))?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow!("HTTP client build error: {}", e))?;

        Ok(Self {
            client,
            base_url,
            asset_id: asset_id.to_string(),
            vs_currency: vs_currency.to_string(),
        })
    }

    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value> {
        let resp = self
            .client
            .get(self.base_url.join(endpoint)?)
            .query(query)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("Price API HTTP {} on {}", status, endpoint));
        }
        Ok(resp.json().await?)
    }
}

/// Pulls the nested numeric field out of `{"<asset>":{"<vs>": <price>}}`
pub fn parse_simple_price(body: &Value, asset_id: &str, vs_currency: &str) -> Result<f64> {
    body.get(asset_id)
        .and_then(|entry| entry.get(vs_currency))
        .and_then(Value::as_f64)
        .ok_or_else(|| anyhow!("Unexpected price response shape: {}", body))
}

#[async_trait::async_trait]
impl PriceFeed for CoinGecko {
    /// GET /ping
    async fn check_connection(&self) -> Result<()> {
        let _: Value = self.get_json("ping", &[]).await?;
        Ok(())
    }

    /// GET /simple/price?ids=...&vs_currencies=...
    async fn spot_price(&self) -> Result<f64> {
        let body = self
            .get_json(
                "simple/price",
                &[
                    ("ids", self.asset_id.as_str()),
                    ("vs_currencies", self.vs_currency.as_str()),
                ],
            )
            .await?;
        parse_simple_price(&body, &self.asset_id, &self.vs_currency)
    }
}
