//! # checkbot
//!
//! Telegram bot that reports public information about a Telegram account (`@handle` or
//! numeric id) and validates phone numbers through NumVerify. Wires config, the handler
//! chain ([`LoggingHandler`], [`SessionHandler`]) and the teloxide dispatcher.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod menu;
pub mod runner;

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, LookupEnvConfig};
pub use handlers::{LoggingHandler, SessionHandler};
pub use runner::run_bot;
