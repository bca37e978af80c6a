// src/notifier/commands.rs

use super::Command;
use crate::card::CardRenderer;
use crate::pricing::{PriceFeed, price_or_fallback};
use crate::report::TradeReport;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

const USAGE_PNL: &str = "Usage: /pnl <name> <symbol> <bought> <sold>";
const INVALID_AMOUNTS: &str = "❌ Invalid input! Use numbers for the amounts.";

/// Splits the raw `/pnl` argument string into its four fields.
/// The error is the reply text to send back.
fn parse_pnl_args(args: &str) -> Result<(String, String, f64, f64), &'static str> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [name, symbol, bought, sold] = parts.as_slice() else {
        return Err(USAGE_PNL);
    };
    let (Ok(bought), Ok(sold)) = (bought.parse::<f64>(), sold.parse::<f64>()) else {
        return Err(INVALID_AMOUNTS);
    };
    Ok((name.to_string(), symbol.to_string(), bought, sold))
}

pub async fn handle_command<F>(
    bot: Bot,
    msg: Message,
    cmd: Command,
    feed: F,
    renderer: Arc<CardRenderer>,
) -> anyhow::Result<()>
where
    F: PriceFeed + Clone + Send + Sync + 'static,
{
    let chat_id = msg.chat.id;

    match cmd {
        Command::Help => {
            bot.send_message(chat_id, Command::descriptions().to_string())
                .await?;
        }
        Command::Status => {
            match feed.check_connection().await {
                Ok(_) => {
                    bot.send_message(chat_id, "✅ Bot is up, price API is reachable.")
                        .await?;
                }
                Err(e) => {
                    bot.send_message(
                        chat_id,
                        format!("⚠️ Bot is up, but the price API is unreachable: {}", e),
                    )
                    .await?;
                }
            }
        }
        Command::Pnl(args) => {
            handle_pnl(&bot, chat_id, &args, &feed, &renderer).await?;
        }
    }

    Ok(())
}

/// /pnl NAME SYMBOL BOUGHT SOLD — the card goes back to the issuing chat only.
async fn handle_pnl<F>(
    bot: &Bot,
    chat_id: ChatId,
    args: &str,
    feed: &F,
    renderer: &CardRenderer,
) -> anyhow::Result<()>
where
    F: PriceFeed + Sync,
{
    let (name, symbol, bought, sold) = match parse_pnl_args(args) {
        Ok(parsed) => parsed,
        Err(reply) => {
            bot.send_message(chat_id, reply).await?;
            return Ok(());
        }
    };

    let price = price_or_fallback(feed).await;
    let report = TradeReport::new(&name, &symbol, bought, sold, price);
    info!(
        "Rendering card for chat {}: {} {} bought {:.1} sold {:.1} @ {:.2}",
        chat_id, report.trader, report.symbol, report.bought, report.sold, report.unit_price
    );

    match renderer.render(&report) {
        Ok(png) => {
            let photo = InputFile::memory(png).file_name(report.file_name());
            bot.send_photo(chat_id, photo)
                .caption(report.summary())
                .await?;
        }
        Err(e) => {
            error!("Card rendering failed for chat {}: {:?}", chat_id, e);
            bot.send_message(chat_id, "❌ Error creating the PNL card, try again later.")
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{INVALID_AMOUNTS, USAGE_PNL, parse_pnl_args};

    #[test]
    fn four_fields_parse() {
        let (name, symbol, bought, sold) = parse_pnl_args("CryptoHawk sol 10 15.5").unwrap();
        assert_eq!(name, "CryptoHawk");
        assert_eq!(symbol, "sol");
        assert_eq!(bought, 10.0);
        assert_eq!(sold, 15.5);
    }

    #[test]
    fn wrong_arity_replies_with_usage() {
        assert_eq!(parse_pnl_args(""), Err(USAGE_PNL));
        assert_eq!(parse_pnl_args("name sol 10"), Err(USAGE_PNL));
        assert_eq!(parse_pnl_args("name sol 10 15 extra"), Err(USAGE_PNL));
    }

    #[test]
    fn non_numeric_amounts_are_rejected() {
        assert_eq!(parse_pnl_args("name sol ten 15"), Err(INVALID_AMOUNTS));
        assert_eq!(parse_pnl_args("name sol 10 fifteen"), Err(INVALID_AMOUNTS));
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        let (_, _, bought, sold) = parse_pnl_args("  name   sol   1.0   2.0  ").unwrap();
        assert_eq!(bought, 1.0);
        assert_eq!(sold, 2.0);
    }
}
