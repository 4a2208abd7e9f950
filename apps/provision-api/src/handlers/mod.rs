//! Request handlers.

pub mod health;
pub mod provision;

pub use health::health_handler;
pub use provision::provision_handler;
