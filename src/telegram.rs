// src/telegram.rs

use crate::card::CardRenderer;
use crate::notifier::{Command, handle_command};
use crate::pricing::PriceFeed;
use std::sync::Arc;
use teloxide::{dptree, prelude::*, types::Message};

pub async fn run<F>(bot: Bot, feed: F, renderer: CardRenderer)
where
    F: PriceFeed + Clone + Send + Sync + 'static,
{
    let renderer = Arc::new(renderer);

    let commands_branch = Update::filter_message()
        .filter_command::<Command>()
        .endpoint({
            let feed = feed.clone();
            let renderer = renderer.clone();
            move |bot: Bot, msg: Message, cmd: Command| {
                let feed = feed.clone();
                let renderer = renderer.clone();
                async move {
                    if let Err(err) = handle_command(bot, msg, cmd, feed, renderer).await {
                        tracing::error!("command handler error: {:?}", err);
                    }
                    respond(())
                }
            }
        });

    Dispatcher::builder(bot, dptree::entry().branch(commands_branch))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
