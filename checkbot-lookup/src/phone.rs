//! Phone resolver: raw phone string → [`PhoneRecord`] via the validation capability.

use std::sync::Arc;

use async_trait::async_trait;
use numverify_client::{NumverifyClient, NumverifyError};
use tracing::{info, instrument, warn};

use crate::capability::PhoneValidator;
use crate::error::{LookupError, ProviderError, Unavailable};
use crate::model::{PhoneRecord, PhoneValidation};
use crate::settings::LookupConfig;

pub struct PhoneResolver {
    validator: Arc<dyn PhoneValidator>,
    access_key: Option<String>,
}

impl PhoneResolver {
    pub fn new(validator: Arc<dyn PhoneValidator>, config: &LookupConfig) -> Self {
        Self {
            validator,
            access_key: config.numverify_api_key().map(str::to_string),
        }
    }

    /// Single validation call, never retried. No key → ServiceUnavailable without any call.
    #[instrument(skip(self))]
    pub async fn resolve_phone(&self, token: &str) -> Result<PhoneRecord, LookupError> {
        let Some(access_key) = self.access_key.as_deref() else {
            warn!("Phone lookup requested but NUMVERIFY_API_KEY is not configured");
            return Err(LookupError::ServiceUnavailable(Unavailable::NotConfigured));
        };

        let number = token.trim();
        match self.validator.validate(access_key, number).await {
            Ok(validation) if validation.valid => {
                info!(number = %number, "Phone number validated");
                Ok(PhoneRecord::from_validation(number, validation))
            }
            Ok(_) => {
                info!(number = %number, "Phone number reported invalid");
                Err(LookupError::InvalidNumber)
            }
            Err(ProviderError::Transport(e)) => {
                warn!(number = %number, error = %e, "Phone validation transport failure");
                Err(LookupError::ServiceUnavailable(Unavailable::Transport))
            }
            Err(e) => {
                warn!(number = %number, error = %e, "Phone validation answer unusable");
                Err(LookupError::InvalidNumber)
            }
        }
    }
}

impl From<NumverifyError> for ProviderError {
    fn from(e: NumverifyError) -> Self {
        match e {
            NumverifyError::Transport(_) | NumverifyError::Status(_) => {
                ProviderError::Transport(e.to_string())
            }
            NumverifyError::Api { .. } => ProviderError::Rejected(e.to_string()),
            NumverifyError::Decode(_) => ProviderError::Malformed(e.to_string()),
        }
    }
}

#[async_trait]
impl PhoneValidator for NumverifyClient {
    async fn validate(
        &self,
        access_key: &str,
        number: &str,
    ) -> Result<PhoneValidation, ProviderError> {
        let response = NumverifyClient::validate(self, access_key, number).await?;
        let valid = response
            .valid
            .ok_or_else(|| ProviderError::Malformed("missing `valid` field".to_string()))?;
        Ok(PhoneValidation {
            valid,
            country_name: response.country_name,
            carrier: response.carrier,
            line_type: response.line_type,
            country_code: response.country_code,
        })
    }
}
