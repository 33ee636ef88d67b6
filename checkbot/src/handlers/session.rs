//! Session surface: commands, menu captions, lookup tokens and the inline "back" button.
//!
//! Every inbound event gets exactly one answer (or none for unknown commands). Lookup
//! failures are rendered for the user here and never leave the handler as errors; only
//! transport failures while sending propagate to the chain.

use std::sync::Arc;

use async_trait::async_trait;
use checkbot_core::{Bot, Chat, Handler, HandlerError, HandlerResponse, Message, Reply, Result};
use checkbot_lookup::{
    classify, format_error, format_phone, format_profile, parse_command, Command, CommandParse,
    IdentityResolver, Intent, LookupError, PhoneResolver, Unavailable, BACK_TO_MAIN,
};
use tracing::{debug, info, instrument, warn};

use crate::menu::{
    back_markup, choose_action_reply, help_reply, welcome_reply, MSG_INVALID_INPUT,
    PROMPT_IDENTITY, PROMPT_PHONE,
};

pub struct SessionHandler {
    bot: Arc<dyn Bot>,
    identity: Arc<IdentityResolver>,
    phone: Arc<PhoneResolver>,
}

impl SessionHandler {
    pub fn new(bot: Arc<dyn Bot>, identity: Arc<IdentityResolver>, phone: Arc<PhoneResolver>) -> Self {
        Self {
            bot,
            identity,
            phone,
        }
    }

    async fn on_start(&self, chat: &Chat) -> Result<HandlerResponse> {
        self.respond(chat, welcome_reply()).await
    }

    async fn on_help(&self, chat: &Chat) -> Result<HandlerResponse> {
        self.respond(chat, help_reply()).await
    }

    async fn on_text(&self, message: &Message) -> Result<HandlerResponse> {
        let intent = classify(&message.content);
        debug!(user_id = message.user.id, intent = intent.name(), "Classified text");

        let reply = match intent {
            Intent::ShowIdentityPrompt => Reply::text(PROMPT_IDENTITY),
            Intent::ShowPhonePrompt => Reply::text(PROMPT_PHONE),
            Intent::ShowHelp => help_reply(),
            Intent::IdentityLookup(token) => self.identity_reply(&token).await,
            Intent::PhoneLookup(token) => self.phone_reply(&token).await,
            Intent::Invalid => Reply::text(MSG_INVALID_INPUT),
        };
        self.respond(&message.chat, reply).await
    }

    async fn identity_reply(&self, token: &str) -> Reply {
        match self.identity.resolve_identity(token).await {
            Ok(profile) => {
                let reply = Reply::html(format_profile(&profile)).with_markup(back_markup());
                match profile.avatar {
                    Some(avatar) => reply.with_photo(avatar.file_id()),
                    None => reply,
                }
            }
            Err(e) => error_reply(&e),
        }
    }

    async fn phone_reply(&self, token: &str) -> Reply {
        match self.phone.resolve_phone(token).await {
            Ok(record) => Reply::html(format_phone(&record)).with_markup(back_markup()),
            Err(e) => error_reply(&e),
        }
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn on_menu_callback(&self, message: &Message) -> Result<HandlerResponse> {
        let callback_id = message
            .callback_id
            .as_deref()
            .ok_or(HandlerError::MissingCallbackId)?;
        if let Err(e) = self.bot.answer_callback(callback_id).await {
            warn!(error = %e, callback_id = %callback_id, "Failed to answer callback");
        }

        if message.content != BACK_TO_MAIN {
            debug!(data = %message.content, "Ignoring unknown callback data");
            return Ok(HandlerResponse::Stop);
        }

        if let Err(e) = self.bot.clear_inline_markup(&message.chat, &message.id).await {
            warn!(error = %e, message_id = %message.id, "Failed to clear inline markup");
        }
        self.respond(&message.chat, choose_action_reply()).await
    }

    /// Sends the reply; a photo reply that fails is retried once as text.
    async fn respond(&self, chat: &Chat, reply: Reply) -> Result<HandlerResponse> {
        if reply.photo.is_some() {
            if let Err(e) = self.bot.send_reply(chat, &reply).await {
                warn!(chat_id = chat.id, error = %e, "Photo reply failed, sending text");
                self.bot.send_reply(chat, &reply.without_photo()).await?;
            }
        } else {
            self.bot.send_reply(chat, &reply).await?;
        }
        Ok(HandlerResponse::Reply(reply.text))
    }
}

/// Error text; the back button is omitted where the user is expected to just retype or
/// where phone lookups are switched off.
fn error_reply(error: &LookupError) -> Reply {
    let reply = Reply::text(format_error(error));
    match error {
        LookupError::InvalidFormat
        | LookupError::ServiceUnavailable(Unavailable::NotConfigured) => reply,
        _ => reply.with_markup(back_markup()),
    }
}

#[async_trait]
impl Handler for SessionHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_callback() {
            return self.on_menu_callback(message).await;
        }

        match parse_command(&message.content) {
            CommandParse::Known(Command::Start) => self.on_start(&message.chat).await,
            CommandParse::Known(Command::Help) => self.on_help(&message.chat).await,
            CommandParse::Unknown(name) => {
                info!(user_id = message.user.id, command = %name, "Ignoring unknown command");
                Ok(HandlerResponse::Stop)
            }
            CommandParse::NotCommand => self.on_text(message).await,
        }
    }
}
