pub mod card;
pub mod config;
pub mod logger;
pub mod notifier;
pub mod pricing;
pub mod report;
pub mod telegram;
pub mod utils;
