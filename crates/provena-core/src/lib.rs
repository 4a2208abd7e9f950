//! Shared vocabulary types for the provena platform.
//!
//! Provides the validated `TenantName` newtype and the role constants used
//! by the authorization check in the provisioning pipeline.

pub mod ids;
pub mod roles;

pub use ids::{InvalidTenantName, TenantName};
