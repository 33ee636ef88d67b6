//! BotConfig: BaseConfig + LookupEnvConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, LookupEnvConfig};

/// Bot config, built once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub lookup: LookupEnvConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let lookup = LookupEnvConfig::from_env()?;
        Ok(Self { base, lookup })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.lookup.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn lookup(&self) -> &LookupEnvConfig {
        &self.lookup
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
