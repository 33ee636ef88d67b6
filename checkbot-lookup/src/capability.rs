//! Outbound capabilities the resolvers depend on. Production impls: `BotApiLookup`
//! (checkbot-telegram) and [`numverify_client::NumverifyClient`]; tests substitute mocks.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::model::{AvatarRef, ChatProfile, PhoneValidation, ProfileQuery};

/// Resolves a handle or numeric id to profile data on the chat platform.
#[async_trait]
pub trait ChatLookup: Send + Sync {
    /// Returns the profile; `avatar` is always None here, see [`ChatLookup::get_avatar`].
    async fn get_profile(&self, query: &ProfileQuery) -> Result<ChatProfile, ProviderError>;

    /// Returns the first of at most `limit` profile photos, if the user has any.
    async fn get_avatar(&self, user_id: i64, limit: u8)
        -> Result<Option<AvatarRef>, ProviderError>;
}

/// Assesses a phone number's validity and carrier/geography metadata.
#[async_trait]
pub trait PhoneValidator: Send + Sync {
    async fn validate(
        &self,
        access_key: &str,
        number: &str,
    ) -> Result<PhoneValidation, ProviderError>;
}
