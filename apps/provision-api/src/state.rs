//! Shared application state.

use std::sync::Arc;

use provena_auth::TokenValidator;
use provena_provisioning::{ExistenceChecker, ProvisioningStrategy};

/// State shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Validates bearer tokens against the provider-fetched signing key.
    pub validator: TokenValidator,

    /// Checks live backend state for existing resources.
    pub checker: ExistenceChecker,

    /// The configured provisioning strategy.
    pub strategy: Arc<dyn ProvisioningStrategy>,
}

impl AppState {
    /// Create application state from its components.
    pub fn new(
        validator: TokenValidator,
        checker: ExistenceChecker,
        strategy: Arc<dyn ProvisioningStrategy>,
    ) -> Self {
        Self {
            validator,
            checker,
            strategy,
        }
    }
}
