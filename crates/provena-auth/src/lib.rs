//! HS256 token validation for the provena platform.
//!
//! Provides the claims model matching the provisioning token wire format,
//! HS256-only encode/decode helpers, and a `TokenValidator` that fetches the
//! signing key through a `SecretProvider` on every validation call.

pub mod claims;
pub mod error;
pub mod jwt;
pub mod validator;

pub use claims::{ProvisioningClaims, TenantClaims};
pub use error::AuthError;
pub use jwt::{decode_token, encode_token, ValidationConfig};
pub use validator::{TokenValidator, SIGNING_KEY_SECRET};
