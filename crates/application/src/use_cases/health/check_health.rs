use gatewarden_domain::{DomainError, VdomSelection};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::ports::PolicyRepository;
use crate::services::TenantScopeResolver;

/// Verifies that the appliance is reachable with the configured credentials
/// and partitions.
pub struct CheckHealthUseCase {
    scope_resolver: Arc<TenantScopeResolver>,
    policies: Arc<dyn PolicyRepository>,
}

impl CheckHealthUseCase {
    pub fn new(
        scope_resolver: Arc<TenantScopeResolver>,
        policies: Arc<dyn PolicyRepository>,
    ) -> Self {
        Self {
            scope_resolver,
            policies,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<bool, DomainError> {
        let resolution = self
            .scope_resolver
            .resolve(&VdomSelection::Default)
            .await
            .map_err(|e| match e {
                DomainError::Validation(msg) => DomainError::PermissionDenied(msg),
                other => other,
            })?;

        if !resolution.not_exist.is_empty() {
            error!(missing = ?resolution.not_exist, "Configured VDOMs not found");
            return Err(DomainError::PermissionDenied(format!(
                "VDOMs {} not found, check VDOM/user or API key permission",
                resolution.not_exist.join(", ")
            )));
        }

        for partition in resolution.scope.partitions() {
            let policies = self.policies.list(&partition).await?;
            info!(vdom = %partition, policies = policies.len(), "Firewall reachable");
        }
        Ok(true)
    }
}
