//! # checkbot-telegram
//!
//! Telegram transport: update adapters, [`checkbot_core::Bot`] implementation, Bot API
//! profile lookup ([`BotApiLookup`]), minimal config and the dispatcher runner.
//! Handles only Telegram connectivity; lookup semantics live in checkbot-lookup.

mod adapters;
mod bot_adapter;
mod config;
mod lookup_client;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_reply_markup, TelegramBotAdapter};
pub use config::{TelegramConfig, DEFAULT_API_URL};
pub use lookup_client::BotApiLookup;
pub use runner::run_dispatcher;
