//! Component factory: builds transport, capabilities and resolvers from config.

use std::sync::Arc;

use anyhow::Result;
use checkbot_core::Bot;
use checkbot_lookup::{ChatLookup, IdentityResolver, PhoneResolver, PhoneValidator};
use checkbot_telegram::{BotApiLookup, TelegramBotAdapter};
use handler_chain::HandlerChain;
use numverify_client::NumverifyClient;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{LoggingHandler, SessionHandler};

/// Dependencies shared by every update; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub identity: Arc<IdentityResolver>,
    pub phone: Arc<PhoneResolver>,
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let telegram = config.base().telegram();
    let teloxide_bot = telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let lookup_config = config.lookup().to_lookup_config();
    let chat_lookup: Arc<dyn ChatLookup> = Arc::new(BotApiLookup::new(teloxide_bot.clone()));
    let validator: Arc<dyn PhoneValidator> =
        Arc::new(NumverifyClient::new().with_api_url(config.lookup().numverify_api_url.clone()));

    info!(
        api_base = %telegram.api_base(),
        numverify_api_url = %config.lookup().numverify_api_url,
        phone_lookup_enabled = lookup_config.phone_lookup_enabled(),
        avatar_timeout_secs = lookup_config.avatar_timeout.as_secs(),
        "Components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot,
        identity: Arc::new(IdentityResolver::new(chat_lookup, &lookup_config)),
        phone: Arc::new(PhoneResolver::new(validator, &lookup_config)),
    })
}

/// Chain: LoggingHandler, then SessionHandler.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    identity: Arc<IdentityResolver>,
    phone: Arc<PhoneResolver>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(SessionHandler::new(bot, identity, phone)))
}
