//! NumVerify phone validation client.
//!
//! One GET per call: `{api_url}?access_key=..&number=..`. The API answers HTTP 200 both for
//! lookups and for account-level failures; the latter carry `{"success": false, "error": {..}}`
//! and are returned as [`NumverifyError::Api`].

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://apilayer.net/api/validate";

/// Masks an API key for logging: first 7 chars + `***` + last 4 chars; keys of 11 chars or
/// fewer become `***`.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

#[derive(Error, Debug)]
pub enum NumverifyError {
    /// Connection, TLS or timeout failure.
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Error object returned by the API (invalid key, quota, missing number...).
    #[error("api error {code} ({kind}): {info}")]
    Api { code: i64, kind: String, info: String },

    #[error("cannot decode response: {0}")]
    Decode(String),
}

/// Successful validation answer. Fields are optional because the API omits or blanks them freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidateResponse {
    pub valid: Option<bool>,
    pub number: Option<String>,
    pub local_format: Option<String>,
    pub international_format: Option<String>,
    pub country_prefix: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub location: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Clone)]
pub struct NumverifyClient {
    client: Client,
    api_url: String,
}

impl Default for NumverifyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NumverifyClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Points the client at another endpoint (e.g. a mock server in tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Validates `number` with the given access key. Not retried.
    #[tracing::instrument(skip(self, access_key))]
    pub async fn validate(
        &self,
        access_key: &str,
        number: &str,
    ) -> Result<ValidateResponse, NumverifyError> {
        tracing::info!(
            api_url = %self.api_url,
            api_key = %mask_token(access_key),
            "step: numverify validate request"
        );

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("access_key", access_key), ("number", number)])
            .send()
            .await
            .map_err(|e| NumverifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NumverifyError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NumverifyError::Transport(e.to_string()))?;
        let parsed = parse_body(&body)?;

        tracing::info!(valid = ?parsed.valid, "step: numverify validate done");
        Ok(parsed)
    }
}

/// Decodes a response body: API error envelope first, then the validation answer.
pub fn parse_body(body: &str) -> Result<ValidateResponse, NumverifyError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| NumverifyError::Decode(e.to_string()))?;

    if value.get("error").is_some() {
        let envelope: ErrorEnvelope =
            serde_json::from_value(value).map_err(|e| NumverifyError::Decode(e.to_string()))?;
        return Err(NumverifyError::Api {
            code: envelope.error.code,
            kind: envelope.error.kind,
            info: envelope.error.info,
        });
    }

    serde_json::from_value(value).map_err(|e| NumverifyError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_valid_number() {
        let parsed = parse_body(
            r#"{"valid":true,"number":"79123456789","country_prefix":"+7",
                "country_code":"7","country_name":"Russia","location":"",
                "carrier":"MTS","line_type":"mobile"}"#,
        )
        .unwrap();

        assert_eq!(parsed.valid, Some(true));
        assert_eq!(parsed.carrier.as_deref(), Some("MTS"));
        assert_eq!(parsed.location.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_body_api_error() {
        let err = parse_body(
            r#"{"success":false,"error":{"code":101,"type":"invalid_access_key","info":"You have not supplied a valid API Access Key."}}"#,
        )
        .unwrap_err();

        match err {
            NumverifyError::Api { code, kind, .. } => {
                assert_eq!(code, 101);
                assert_eq!(kind, "invalid_access_key");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_body_not_json() {
        assert!(matches!(
            parse_body("<html>502</html>"),
            Err(NumverifyError::Decode(_))
        ));
    }

    #[test]
    fn test_parse_body_missing_valid_is_none() {
        let parsed = parse_body(r#"{"number":"123"}"#).unwrap();
        assert!(parsed.valid.is_none());
    }
}
