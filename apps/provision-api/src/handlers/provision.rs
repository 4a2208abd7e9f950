//! Tenant provisioning handler.
//!
//! Orchestrates the full pipeline: parse body, validate token, check role,
//! check existence, provision. Each step short-circuits with its own
//! response; nothing downstream runs after a failure.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

use provena_core::{roles, TenantName};
use provena_provisioning::{ProvisionError, ResourceName, ResourceStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// Expected request body shape.
#[derive(Debug, Deserialize)]
pub struct ProvisionRequest {
    #[serde(rename = "tenanName")]
    pub tenan_name: String,
}

/// POST /tenants/provision
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// the 400 response body carries the parse error verbatim.
pub async fn provision_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    let request: ProvisionRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let tenant = TenantName::new(&request.tenan_name)
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let raw_token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let claims = state.validator.validate(raw_token).await.map_err(|e| {
        if e.is_key_failure() {
            warn!(error = %e, "signing key fetch failed");
            ApiError::Internal
        } else {
            warn!(error = %e, "token validation failed");
            ApiError::Unauthorized
        }
    })?;

    // Role gate: a valid token is not enough
    if !claims.data.has_role(roles::SUPER_ADMIN) {
        warn!(tenant = %tenant, role = %claims.data.role, "insufficient role");
        return Err(ApiError::Unauthorized);
    }

    let resource = ResourceName::for_tenant(&tenant);

    let status = state.checker.check(&resource).await.map_err(|e| {
        warn!(resource = %resource, error = %e, "existence check failed");
        ApiError::Internal
    })?;

    if status == ResourceStatus::AlreadyExists {
        info!(resource = %resource, "resource already provisioned");
        return Ok((StatusCode::OK, "this tenan alreadly exists."));
    }

    state.strategy.provision(&resource).await.map_err(|e| {
        warn!(
            resource = %resource,
            strategy = state.strategy.strategy_type(),
            error = %e,
            "provisioning failed"
        );
        match e {
            ProvisionError::Publish(_) => ApiError::SendBusFailed,
            ProvisionError::Backend(_) => ApiError::CreateTableFailed,
        }
    })?;

    info!(
        resource = %resource,
        strategy = state.strategy.strategy_type(),
        "tenant provisioned"
    );
    Ok((StatusCode::OK, "ok"))
}
