//! Request-scoped lookup records. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Transport file id of a profile photo (largest size of the first photo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRef(pub String);

impl AvatarRef {
    pub fn file_id(&self) -> &str {
        &self.0
    }
}

/// Argument of the chat lookup capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileQuery {
    /// Handle including the leading `@`, passed verbatim.
    Handle(String),
    /// Numeric chat/user id.
    Id(i64),
}

impl std::fmt::Display for ProfileQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileQuery::Handle(h) => write!(f, "{}", h),
            ProfileQuery::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Profile summary of a chat-platform identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatProfile {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
    pub is_bot: bool,
    pub is_premium: bool,
    pub avatar: Option<AvatarRef>,
}

/// Decoded answer of the phone validation capability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneValidation {
    pub valid: bool,
    pub country_name: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
    pub country_code: Option<String>,
}

/// Validity and carrier/geography metadata of a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// Raw input as the user typed it.
    pub number: String,
    pub valid: bool,
    pub country_name: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
    pub country_code: Option<String>,
}

impl PhoneRecord {
    /// Builds a record from a provider answer; blank strings become None.
    pub fn from_validation(number: impl Into<String>, validation: PhoneValidation) -> Self {
        Self {
            number: number.into(),
            valid: validation.valid,
            country_name: non_blank(validation.country_name),
            carrier: non_blank(validation.carrier),
            line_type: non_blank(validation.line_type),
            country_code: non_blank(validation.country_code),
        }
    }
}

/// Treats empty and whitespace-only strings as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
