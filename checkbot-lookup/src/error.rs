//! Lookup error taxonomy and capability errors.

use thiserror::Error;

/// Why the phone service could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// No access key configured.
    NotConfigured,
    /// Transport-level failure talking to the provider.
    Transport,
}

/// Outcome of a failed lookup. Every case is turned into a user-visible message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("input is neither a handle nor a numeric id")]
    InvalidFormat,

    /// Not found and hidden by privacy settings are deliberately the same case.
    #[error("profile not found or hidden")]
    NotFoundOrHidden,

    #[error("number rejected by the validation service")]
    InvalidNumber,

    #[error("phone validation service unavailable: {0:?}")]
    ServiceUnavailable(Unavailable),
}

/// Failure reported by a capability (chat lookup or phone validation).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered but refused the request (not found, private, API error object).
    #[error("rejected by provider: {0}")]
    Rejected(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}
