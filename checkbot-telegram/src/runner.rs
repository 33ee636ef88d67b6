//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and
//! passes them to the HandlerChain. Long polling until Ctrl-C.

use anyhow::Result;
use checkbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::{
    dispatching::{Dispatcher, UpdateFilterExt},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    types::{CallbackQuery, Update},
};
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

async fn run_chain(chain: &HandlerChain, core_msg: checkbot_core::Message) {
    if let Err(e) = chain.handle(&core_msg).await {
        error!(
            error = %e,
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Handler chain failed"
        );
    }
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    if msg.text().is_none() {
        debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
        return Ok(());
    }
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_content = %core_msg.content,
        "Received message"
    );
    run_chain(&chain, core_msg).await;
    Ok(())
}

async fn on_callback(query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        data = %core_msg.content,
        "Received callback query"
    );
    run_chain(&chain, core_msg).await;
    Ok(())
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
/// Calls get_me() first so a bad token fails before polling starts.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let me = bot.get_me().await?;
    info!(
        username = %me.user.username.as_deref().unwrap_or("unknown"),
        "Bot identity confirmed"
    );

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Starting dispatcher with long polling");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|upd| async move {
            debug!(update = ?upd, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
