use anyhow::Result;
use checkbot_core::init_tracing;
use checkbot_telegram::run_dispatcher;
use numverify_client::mask_token;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and chain, then poll until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        bot_token = %mask_token(config.bot_token()),
        numverify_api_key = %config
            .lookup()
            .numverify_api_key
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| "<unset>".to_string()),
        log_file = %config.log_file(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(
        components.bot.clone(),
        components.identity.clone(),
        components.phone.clone(),
    );

    run_dispatcher(components.teloxide_bot, handler_chain).await
}
