//! Identity resolver: handle or numeric id → [`ChatProfile`], with a best-effort avatar.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::capability::ChatLookup;
use crate::error::LookupError;
use crate::model::{AvatarRef, ChatProfile, ProfileQuery};
use crate::settings::LookupConfig;

/// Number of profile photos requested for the avatar.
const AVATAR_LIMIT: u8 = 1;

pub struct IdentityResolver {
    lookup: Arc<dyn ChatLookup>,
    avatar_timeout: Duration,
}

impl IdentityResolver {
    pub fn new(lookup: Arc<dyn ChatLookup>, config: &LookupConfig) -> Self {
        Self {
            lookup,
            avatar_timeout: config.avatar_timeout,
        }
    }

    /// Turns user input into a lookup query. `@handle` is kept verbatim; anything else must be an i64.
    pub fn parse_query(token: &str) -> Result<ProfileQuery, LookupError> {
        let token = token.trim();
        if token.starts_with('@') {
            return Ok(ProfileQuery::Handle(token.to_string()));
        }
        token
            .parse::<i64>()
            .map(ProfileQuery::Id)
            .map_err(|_| LookupError::InvalidFormat)
    }

    /// Resolves the token to a profile. Provider failures of any kind collapse into
    /// [`LookupError::NotFoundOrHidden`]; avatar failures never fail the lookup.
    #[instrument(skip(self))]
    pub async fn resolve_identity(&self, token: &str) -> Result<ChatProfile, LookupError> {
        let query = Self::parse_query(token)?;

        let mut profile = match self.lookup.get_profile(&query).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(query = %query, error = %e, "Identity lookup failed");
                return Err(LookupError::NotFoundOrHidden);
            }
        };

        profile.avatar = self.fetch_avatar(profile.id).await;
        info!(
            query = %query,
            profile_id = profile.id,
            has_avatar = profile.avatar.is_some(),
            "Identity resolved"
        );
        Ok(profile)
    }

    /// Timeboxed avatar fetch; errors and timeouts are logged and yield None.
    async fn fetch_avatar(&self, user_id: i64) -> Option<AvatarRef> {
        match tokio::time::timeout(
            self.avatar_timeout,
            self.lookup.get_avatar(user_id, AVATAR_LIMIT),
        )
        .await
        {
            Ok(Ok(avatar)) => avatar,
            Ok(Err(e)) => {
                warn!(user_id = user_id, error = %e, "Avatar fetch failed");
                None
            }
            Err(_) => {
                warn!(
                    user_id = user_id,
                    timeout_ms = self.avatar_timeout.as_millis() as u64,
                    "Avatar fetch timed out"
                );
                None
            }
        }
    }
}
