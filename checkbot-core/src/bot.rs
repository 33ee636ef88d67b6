//! Bot abstraction for sending replies and reacting to button presses.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in checkbot-telegram.

use crate::error::{DbotError, Result};
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Abstraction for outbound messaging. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (text or photo with caption, with optional markup) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Removes the inline keyboard from an already-sent message. `message_id` is transport-specific.
    async fn clear_inline_markup(&self, chat: &Chat, message_id: &str) -> Result<()>;

    /// Acknowledges a callback query so the client stops its loading indicator.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used by clear_inline_markup.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
