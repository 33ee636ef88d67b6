//! [`ChatLookup`] over the Bot API through teloxide (`getChat`, `getUserProfilePhotos`).
//!
//! `getChat` answers with ChatFullInfo, which carries no `is_bot`, `is_premium` or
//! `language_code`; those stay at their defaults.

use async_trait::async_trait;
use checkbot_lookup::{AvatarRef, ChatLookup, ChatProfile, ProfileQuery, ProviderError};
use teloxide::{
    prelude::*,
    types::{ChatFullInfo, Recipient},
    RequestError,
};
use tracing::{debug, instrument};

/// Maps teloxide failures: API answers are rejections, bad JSON is malformed, the rest is transport.
fn provider_error(e: RequestError) -> ProviderError {
    match e {
        RequestError::Api(api) => ProviderError::Rejected(api.to_string()),
        err @ RequestError::InvalidJson { .. } => ProviderError::Malformed(err.to_string()),
        other => ProviderError::Transport(other.to_string()),
    }
}

fn to_profile(chat: &ChatFullInfo) -> ChatProfile {
    ChatProfile {
        id: chat.id.0,
        // Groups and channels have a title instead of a first name.
        first_name: chat.first_name().or(chat.title()).map(str::to_string),
        last_name: chat.last_name().map(str::to_string),
        username: chat.username().map(str::to_string),
        ..ChatProfile::default()
    }
}

#[derive(Clone)]
pub struct BotApiLookup {
    bot: teloxide::Bot,
}

impl BotApiLookup {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatLookup for BotApiLookup {
    #[instrument(skip(self))]
    async fn get_profile(&self, query: &ProfileQuery) -> Result<ChatProfile, ProviderError> {
        let recipient = match query {
            ProfileQuery::Handle(handle) => Recipient::ChannelUsername(handle.clone()),
            ProfileQuery::Id(id) => Recipient::Id(ChatId(*id)),
        };
        let chat = self.bot.get_chat(recipient).await.map_err(provider_error)?;
        debug!(chat_id = chat.id.0, "step: getChat done");
        Ok(to_profile(&chat))
    }

    #[instrument(skip(self))]
    async fn get_avatar(
        &self,
        user_id: i64,
        limit: u8,
    ) -> Result<Option<AvatarRef>, ProviderError> {
        // Groups and channels have negative ids and no profile photos.
        let Ok(user_id) = u64::try_from(user_id) else {
            return Ok(None);
        };
        let photos = self
            .bot
            .get_user_profile_photos(UserId(user_id))
            .limit(limit)
            .await
            .map_err(provider_error)?;
        // Sizes are ordered small to large; keep the largest of the first photo.
        Ok(photos
            .photos
            .into_iter()
            .next()
            .and_then(|sizes| sizes.into_iter().last())
            .map(|p| AvatarRef(p.file.id.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TelegramConfig;
    use mockito::Matcher;
    use serde_json::json;

    const TOKEN: &str = "123:test";

    fn lookup_for(server: &mockito::ServerGuard) -> BotApiLookup {
        let config = TelegramConfig::with_token(TOKEN.to_string()).with_api_url(Some(server.url()));
        BotApiLookup::new(config.build_bot().unwrap())
    }

    /// Teloxide request path is `/bot<token>/<method>`; method casing is not significant to the API.
    fn method_path(method: &str) -> Matcher {
        Matcher::Regex(format!("(?i)^/bot{}/{}$", TOKEN, method))
    }

    const CHAT_ALICE: &str = r#"{"ok":true,"result":{"id":1,"type":"private","first_name":"A",
        "accent_color_id":0,"max_reaction_count":11,
        "accepted_gift_types":{"unlimited_gifts":false,"limited_gifts":false,"unique_gifts":false,"premium_subscription":false}}}"#;

    #[tokio::test]
    async fn test_get_profile_by_handle() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", method_path("getChat"))
            .match_body(Matcher::PartialJson(json!({ "chat_id": "@alice" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CHAT_ALICE)
            .create_async()
            .await;

        let profile = lookup_for(&server)
            .get_profile(&ProfileQuery::Handle("@alice".to_string()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(profile.id, 1);
        assert_eq!(profile.first_name.as_deref(), Some("A"));
        assert!(profile.username.is_none());
        assert!(profile.avatar.is_none());
    }

    #[tokio::test]
    async fn test_get_profile_by_id_sends_integer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", method_path("getChat"))
            .match_body(Matcher::PartialJson(json!({ "chat_id": 1 })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CHAT_ALICE)
            .create_async()
            .await;

        let profile = lookup_for(&server)
            .get_profile(&ProfileQuery::Id(1))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(profile.id, 1);
    }

    #[tokio::test]
    async fn test_chat_not_found_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", method_path("getChat"))
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#)
            .create_async()
            .await;

        let err = lookup_for(&server)
            .get_profile(&ProfileQuery::Id(1))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Rejected(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_get_avatar_takes_largest_size_of_first_photo() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", method_path("getUserProfilePhotos"))
            .match_body(Matcher::PartialJson(json!({ "user_id": 1, "limit": 1 })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"ok":true,"result":{"total_count":3,"photos":[[
                    {"file_id":"small","file_unique_id":"s","width":160,"height":160},
                    {"file_id":"big","file_unique_id":"b","width":640,"height":640}]]}}"#,
            )
            .create_async()
            .await;

        let avatar = lookup_for(&server).get_avatar(1, 1).await.unwrap();

        mock.assert_async().await;
        assert_eq!(avatar, Some(AvatarRef("big".to_string())));
    }

    #[tokio::test]
    async fn test_get_avatar_none_when_no_photos() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", method_path("getUserProfilePhotos"))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true,"result":{"total_count":0,"photos":[]}}"#)
            .create_async()
            .await;

        assert_eq!(lookup_for(&server).get_avatar(1, 1).await.unwrap(), None);
    }

    /// **Test: a negative (group/channel) id has no avatar and makes no request.**
    #[tokio::test]
    async fn test_get_avatar_negative_id_skips_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", method_path("getUserProfilePhotos"))
            .expect(0)
            .create_async()
            .await;

        assert_eq!(lookup_for(&server).get_avatar(-100123, 1).await.unwrap(), None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_garbage_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", method_path("getChat"))
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = lookup_for(&server)
            .get_profile(&ProfileQuery::Id(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)), "got {:?}", err);
    }
}
