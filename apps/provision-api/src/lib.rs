//! Token-gated tenant provisioning service.
//!
//! A single-endpoint API: a bearer token with the privileged role
//! authorizes creating a tenant's backing resource, either directly or by
//! publishing a request for a downstream consumer. Provisioning is
//! idempotent; an existing resource short-circuits to a no-op response.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod state;

pub use config::{Config, StrategyKind};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
