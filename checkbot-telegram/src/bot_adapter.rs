//! Wraps teloxide::Bot and implements [`checkbot_core::Bot`]. Production code sends through
//! Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use checkbot_core::{
    parse_message_id, Bot as CoreBot, Chat, DbotError, Markup, Reply, Result, TextFormat,
};
use teloxide::{
    prelude::*,
    types::{
        ChatId, FileId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, KeyboardButton,
        KeyboardMarkup, MessageId, ParseMode, ReplyMarkup,
    },
};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

/// Maps core markup to teloxide markup; None for [`Markup::None`].
pub fn to_reply_markup(markup: &Markup) -> Option<ReplyMarkup> {
    match markup {
        Markup::None => None,
        Markup::Keyboard(rows) => {
            let rows = rows
                .iter()
                .map(|row| row.iter().map(|c| KeyboardButton::new(c.clone())).collect::<Vec<_>>())
                .collect::<Vec<_>>();
            Some(ReplyMarkup::Keyboard(
                KeyboardMarkup::new(rows).resize_keyboard(),
            ))
        }
        Markup::Inline(rows) => {
            let rows = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.data.clone()))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            Some(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows)))
        }
    }
}

fn to_parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    async fn send_text(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if let Some(mode) = to_parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = to_reply_markup(&reply.markup) {
            request = request.reply_markup(markup);
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, file_id: &str, reply: &Reply) -> Result<()> {
        let photo = InputFile::file_id(FileId(file_id.to_string()));
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), photo)
            .caption(reply.text.clone());
        if let Some(mode) = to_parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = to_reply_markup(&reply.markup) {
            request = request.reply_markup(markup);
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        debug!(
            chat_id = chat.id,
            has_photo = reply.photo.is_some(),
            text_len = reply.text.len(),
            "step: sending reply"
        );
        match reply.photo.as_deref() {
            Some(file_id) => self.send_photo(chat, file_id, reply).await,
            None => self.send_text(chat, reply).await,
        }
    }

    async fn clear_inline_markup(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_reply_markup(ChatId(chat.id), MessageId(id))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(teloxide::types::CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
