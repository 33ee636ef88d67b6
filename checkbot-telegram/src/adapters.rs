//! Adapters from Telegram (teloxide) updates to checkbot_core types.

use checkbot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: chat_type(chat).to_string(),
    }
}

fn unknown_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Wraps a teloxide Message (text or command) for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(unknown_user),
            chat: core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            kind: MessageKind::Text,
            created_at: chrono::Utc::now(),
            callback_id: None,
        }
    }
}

/// Wraps a teloxide CallbackQuery. `id` becomes the id of the message carrying the button,
/// `content` the callback data.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let (chat, message_id) = match query.message.as_ref() {
            Some(m) => (core_chat(m.chat()), m.id().0.to_string()),
            None => (
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
                String::new(),
            ),
        };

        Message {
            id: message_id,
            user,
            chat,
            content: query.data.clone().unwrap_or_default(),
            kind: MessageKind::Callback,
            created_at: chrono::Utc::now(),
            callback_id: Some(query.id.to_string()),
        }
    }
}
