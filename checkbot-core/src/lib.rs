//! # checkbot-core
//!
//! Core types and traits for the lookup bot: [`Bot`], [`Handler`], inbound [`Message`], outbound
//! [`Reply`] with [`Markup`], and tracing initialization. Transport-agnostic; used by
//! checkbot-telegram, handler-chain and the checkbot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, InlineButton, Markup, Message, MessageKind, Reply,
    TextFormat, ToCoreMessage, ToCoreUser, User,
};
