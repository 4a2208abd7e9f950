//! Error types for token validation.
//!
//! Provides explicit error variants for all validation failures. Every
//! variant except `KeyUnavailable` is an authorization failure; only a
//! failed key fetch is an internal error.

use provena_secrets::SecretError;
use thiserror::Error;

/// Token validation error types.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token has expired (exp claim is in the past).
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature is invalid.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token format is malformed or invalid.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token uses an unsupported algorithm (only HS256 is allowed).
    #[error("Unsupported algorithm: only HS256 is allowed")]
    InvalidAlgorithm,

    /// Required claim is missing from token.
    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    /// The signing key could not be fetched from the credential store.
    #[error("Signing key unavailable: {0}")]
    KeyUnavailable(#[from] SecretError),
}

impl AuthError {
    /// Check if this error indicates an expired token.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }

    /// Check if this error indicates an invalid signature.
    #[must_use]
    pub fn is_invalid_signature(&self) -> bool {
        matches!(self, AuthError::InvalidSignature)
    }

    /// True when the failure is in the key fetch rather than the token.
    ///
    /// Key fetch failures map to an internal-error response; every other
    /// variant maps to unauthorized.
    #[must_use]
    pub fn is_key_failure(&self) -> bool {
        matches!(self, AuthError::KeyUnavailable(_))
    }
}
