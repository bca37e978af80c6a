// src/report.rs

use crate::utils::format_compact;

/// Transient per-request value object: built, rendered, discarded.
#[derive(Debug, Clone)]
pub struct TradeReport {
    pub trader: String,
    pub symbol: String,
    pub bought: f64,
    pub sold: f64,
    pub unit_price: f64,

    // derived
    pub bought_usd: f64,
    pub sold_usd: f64,
    pub pnl_units: f64,
    pub pnl_usd: f64,
    pub is_profit: bool,
}

impl TradeReport {
    pub fn new(trader: &str, symbol: &str, bought: f64, sold: f64, unit_price: f64) -> Self {
        let pnl_units = sold - bought;
        Self {
            trader: trader.to_string(),
            symbol: symbol.to_uppercase(),
            bought,
            sold,
            unit_price,
            bought_usd: bought * unit_price,
            sold_usd: sold * unit_price,
            pnl_units,
            pnl_usd: pnl_units * unit_price,
            is_profit: pnl_units > 0.0,
        }
    }

    /// Caption sent alongside the card
    pub fn summary(&self) -> String {
        let sign = if self.is_profit { "+" } else { "-" };
        format!(
            "🔒 Private trading report\nTrader: {}\n{} price: ${:.2}\nP&L: {}{} {} (${})",
            self.trader,
            self.symbol,
            self.unit_price,
            sign,
            format_compact(self.pnl_units, 1),
            self.symbol,
            format_compact(self.pnl_usd, 2),
        )
    }

    /// Attachment file name, e.g. `trader_sol_pnl.png`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_pnl.png",
            self.trader.to_lowercase(),
            self.symbol.to_lowercase()
        )
    }
}
