//! # checkbot-lookup
//!
//! The lookup domain of checkbot, independent of any chat transport:
//!
//! - [`intent`]: classifies inbound text into an [`Intent`] and parses entry commands.
//! - [`identity`]: resolves `@handle` or numeric id to a [`ChatProfile`] through [`ChatLookup`].
//! - [`phone`]: resolves a phone string to a [`PhoneRecord`] through [`PhoneValidator`].
//! - [`format`]: pure rendering of profiles, phone records and [`LookupError`]s.

pub mod capability;
pub mod error;
pub mod format;
pub mod identity;
pub mod intent;
pub mod model;
pub mod phone;
pub mod settings;

pub use capability::{ChatLookup, PhoneValidator};
pub use error::{LookupError, ProviderError, Unavailable};
pub use format::{escape_html, format_error, format_phone, format_profile};
pub use identity::IdentityResolver;
pub use intent::{classify, parse_command, Command, CommandParse, Intent, BACK_TO_MAIN};
pub use model::{AvatarRef, ChatProfile, PhoneRecord, PhoneValidation, ProfileQuery};
pub use phone::PhoneResolver;
pub use settings::{LookupConfig, DEFAULT_AVATAR_TIMEOUT};
