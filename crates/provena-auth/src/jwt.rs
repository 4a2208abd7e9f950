//! JWT encoding and decoding with the HS256 algorithm.
//!
//! The signing key is a shared symmetric secret. Decoding accepts exactly
//! HS256; tokens signed with any other algorithm are rejected outright,
//! closing the algorithm-confusion forgery vector.

use crate::claims::ProvisioningClaims;
use crate::error::AuthError;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Leeway in seconds for exp/nbf validation (clock skew tolerance).
    pub leeway: u64,
    /// Whether to validate expiration.
    pub validate_exp: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            leeway: 60, // 60 seconds clock skew tolerance
            validate_exp: true,
        }
    }
}

impl ValidationConfig {
    /// Create a new validation config with custom leeway.
    #[must_use]
    pub fn with_leeway(leeway: u64) -> Self {
        Self {
            leeway,
            ..Default::default()
        }
    }

    /// Disable expiration validation (use with caution).
    #[must_use]
    pub fn skip_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }
}

/// Encode claims into a signed token string using HS256.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if encoding fails.
pub fn encode_token(claims: &ProvisioningClaims, key: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(key);
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &key).map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a token.
///
/// # Errors
///
/// - `AuthError::TokenExpired` - Token has expired
/// - `AuthError::InvalidSignature` - Signature verification failed
/// - `AuthError::InvalidToken` - Token format is invalid
/// - `AuthError::InvalidAlgorithm` - Token uses an algorithm other than HS256
pub fn decode_token(
    token: &str,
    key: &[u8],
    config: &ValidationConfig,
) -> Result<ProvisioningClaims, AuthError> {
    let key = DecodingKey::from_secret(key);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = config.leeway;
    validation.validate_exp = config.validate_exp;

    // Only accept HS256
    validation.algorithms = vec![Algorithm::HS256];

    let token_data: TokenData<ProvisioningClaims> =
        decode(token, &key, &validation).map_err(map_jwt_error)?;

    Ok(token_data.claims)
}

/// Map jsonwebtoken errors to `AuthError`.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::ImmatureSignature => AuthError::InvalidToken("Token not yet valid".to_string()),
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => AuthError::InvalidAlgorithm,
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid JSON in claims".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => AuthError::MissingClaim(claim.to_string()),
        _ => AuthError::InvalidToken(format!("Token validation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProvisioningClaims;
    use chrono::Utc;

    const TEST_KEY: &[u8] = b"test-signing-key-material";
    const WRONG_KEY: &[u8] = b"a-different-signing-key";

    fn test_claims() -> ProvisioningClaims {
        ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .email("ops@example.com")
            .auth_status(true)
            .expires_in_secs(3600)
            .build()
    }

    #[test]
    fn test_encode_token_shape() {
        let token = encode_token(&test_claims(), TEST_KEY).unwrap();

        // Token should have 3 parts separated by dots
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let original = test_claims();
        let token = encode_token(&original, TEST_KEY).unwrap();
        let decoded = decode_token(&token, TEST_KEY, &ValidationConfig::default()).unwrap();

        assert_eq!(decoded.data.tenan, "acme");
        assert_eq!(decoded.data.role, "super_admin");
        assert_eq!(decoded.data.email, "ops@example.com");
        assert!(decoded.data.auth_status);
        assert_eq!(decoded.exp, original.exp);
    }

    #[test]
    fn test_decode_token_wrong_key() {
        let token = encode_token(&test_claims(), TEST_KEY).unwrap();
        let result = decode_token(&token, WRONG_KEY, &ValidationConfig::default());

        assert!(matches!(result.unwrap_err(), AuthError::InvalidSignature));
    }

    #[test]
    fn test_decode_token_wrong_algorithm() {
        // Sign with HS384: structurally valid, same key family, wrong alg
        let header = jsonwebtoken::Header::new(Algorithm::HS384);
        let key = jsonwebtoken::EncodingKey::from_secret(TEST_KEY);
        let token = jsonwebtoken::encode(&header, &test_claims(), &key).unwrap();

        let result = decode_token(&token, TEST_KEY, &ValidationConfig::default());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidAlgorithm));
    }

    #[test]
    fn test_decode_token_expired() {
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .expiration(Utc::now().timestamp() - 3600) // 1 hour ago
            .build();

        let token = encode_token(&claims, TEST_KEY).unwrap();
        let result = decode_token(&token, TEST_KEY, &ValidationConfig::default());

        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn test_decode_token_with_leeway() {
        // Token expired 30 seconds ago is still valid with 60s leeway
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .expiration(Utc::now().timestamp() - 30)
            .build();

        let token = encode_token(&claims, TEST_KEY).unwrap();
        assert!(decode_token(&token, TEST_KEY, &ValidationConfig::default()).is_ok());

        // Expired 120 seconds ago fails even with the default leeway
        let claims = ProvisioningClaims::builder()
            .tenant("acme")
            .role("super_admin")
            .expiration(Utc::now().timestamp() - 120)
            .build();

        let token = encode_token(&claims, TEST_KEY).unwrap();
        let result = decode_token(&token, TEST_KEY, &ValidationConfig::default());
        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn test_decode_token_malformed() {
        let result = decode_token("not.a.valid.token", TEST_KEY, &ValidationConfig::default());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }
}
