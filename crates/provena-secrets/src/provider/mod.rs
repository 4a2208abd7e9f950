//! Secret provider implementations.

pub mod env;
pub mod s3;
