//! Resolver configuration, built once at startup and handed to the resolvers.

use std::time::Duration;

pub const DEFAULT_AVATAR_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct LookupConfig {
    numverify_api_key: Option<String>,
    pub avatar_timeout: Duration,
}

impl LookupConfig {
    /// Blank keys count as not configured.
    pub fn new(numverify_api_key: Option<String>, avatar_timeout: Duration) -> Self {
        Self {
            numverify_api_key: numverify_api_key.filter(|k| !k.trim().is_empty()),
            avatar_timeout,
        }
    }

    pub fn numverify_api_key(&self) -> Option<&str> {
        self.numverify_api_key.as_deref()
    }

    pub fn phone_lookup_enabled(&self) -> bool {
        self.numverify_api_key.is_some()
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_AVATAR_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = LookupConfig::new(Some("   ".to_string()), DEFAULT_AVATAR_TIMEOUT);
        assert!(config.numverify_api_key().is_none());
        assert!(!config.phone_lookup_enabled());
    }

    #[test]
    fn test_key_is_kept() {
        let config = LookupConfig::new(Some("abc".to_string()), Duration::from_secs(2));
        assert_eq!(config.numverify_api_key(), Some("abc"));
        assert_eq!(config.avatar_timeout, Duration::from_secs(2));
    }
}
