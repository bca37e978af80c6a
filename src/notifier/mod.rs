pub mod commands;

pub use self::commands::handle_command;

use teloxide::utils::command::BotCommands;

/// All bot commands
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show this message")]
    Help,
    #[command(description = "check the price feed connection")]
    Status,
    #[command(description = "render a PNL card: /pnl <name> <symbol> <bought> <sold>")]
    Pnl(String),
}
