//! Bot configuration: BaseConfig (Telegram + log) + LookupEnvConfig (phone service, avatar timebox).

mod base;
mod bot_config;
mod lookup;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use lookup::LookupEnvConfig;
