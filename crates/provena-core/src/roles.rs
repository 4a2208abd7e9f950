//! Role constants carried in token claims.

/// The only role authorized to trigger tenant provisioning.
pub const SUPER_ADMIN: &str = "super_admin";
