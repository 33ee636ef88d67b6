//! Lookup config: phone validation service and avatar timebox. Loaded from env.

use anyhow::Result;
use checkbot_lookup::{LookupConfig, DEFAULT_AVATAR_TIMEOUT};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LookupEnvConfig {
    /// NUMVERIFY_API_KEY; None (or blank) disables phone lookups without failing startup.
    pub numverify_api_key: Option<String>,
    /// NUMVERIFY_API_URL
    pub numverify_api_url: String,
    /// AVATAR_TIMEOUT_SECS
    pub avatar_timeout_secs: u64,
}

impl LookupEnvConfig {
    pub fn from_env() -> Result<Self> {
        let numverify_api_key = env::var("NUMVERIFY_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let numverify_api_url = env::var("NUMVERIFY_API_URL")
            .unwrap_or_else(|_| numverify_client::DEFAULT_API_URL.to_string());
        let avatar_timeout_secs = match env::var("AVATAR_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("AVATAR_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_AVATAR_TIMEOUT.as_secs(),
        };

        Ok(Self {
            numverify_api_key,
            numverify_api_url,
            avatar_timeout_secs,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.numverify_api_url).is_err() {
            anyhow::bail!(
                "NUMVERIFY_API_URL is not a valid URL: {}",
                self.numverify_api_url
            );
        }
        if self.avatar_timeout_secs == 0 {
            anyhow::bail!("AVATAR_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    /// Resolver settings handed to the lookup services.
    pub fn to_lookup_config(&self) -> LookupConfig {
        LookupConfig::new(
            self.numverify_api_key.clone(),
            Duration::from_secs(self.avatar_timeout_secs),
        )
    }
}
