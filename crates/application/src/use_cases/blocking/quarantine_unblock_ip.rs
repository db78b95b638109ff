use gatewarden_domain::{ApiResponse, DomainError, QuarantineUnblockRequest, UnblockReport};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::QuarantineGateway;
use crate::services::TenantScopeResolver;

/// Use case for clearing IPs from the ban list.
pub struct QuarantineUnblockIpUseCase {
    scope_resolver: Arc<TenantScopeResolver>,
    gateway: Arc<dyn QuarantineGateway>,
}

impl QuarantineUnblockIpUseCase {
    pub fn new(
        scope_resolver: Arc<TenantScopeResolver>,
        gateway: Arc<dyn QuarantineGateway>,
    ) -> Self {
        Self {
            scope_resolver,
            gateway,
        }
    }

    /// IPs banned in at least one partition are cleared; the rest are
    /// reported as `not_exist`.
    #[instrument(skip(self, request), fields(ips = request.ips.len()))]
    pub async fn execute(
        &self,
        request: &QuarantineUnblockRequest,
    ) -> Result<UnblockReport, DomainError> {
        let resolution = self.scope_resolver.resolve(&request.vdom).await?;
        let scope = resolution.scope;

        let banned = self.gateway.list_banned(&scope).await?;

        let (listed, missing): (Vec<Arc<str>>, Vec<Arc<str>>) = request
            .ips
            .as_slice()
            .iter()
            .cloned()
            .partition(|ip| banned.iter().any(|set| set.contains(ip)));

        let mut report = UnblockReport::with_missing_vdoms(resolution.not_exist);
        report.add_not_exist(&missing);

        if listed.is_empty() {
            info!("None of the IP addresses are quarantined");
            return Ok(report);
        }

        match self.gateway.unban(&scope, &listed).await {
            Ok(ApiResponse::Success) => report.add_newly_unblocked(&listed),
            Ok(ApiResponse::PartialSuccess(statuses)) if !statuses.is_empty() => {
                for status in &statuses {
                    if status.success {
                        report.add_newly_unblocked(&listed);
                    } else {
                        let vdom = status.vdom.as_deref().unwrap_or("global");
                        warn!(vdom, "Unban rejected for VDOM");
                        report.add_errors(Some(vdom), &listed);
                    }
                }
            }
            Ok(response) => {
                error!(
                    response = ?response,
                    "Check VDOM/user or API key permission to clear quarantined IP addresses"
                );
                report.add_errors(None, &listed);
            }
            Err(e) => {
                error!(error = %e, "Failed to clear quarantined IP addresses");
                report.add_errors(None, &listed);
            }
        }

        info!(
            newly = report.newly_unblocked.len(),
            not_exist = report.not_exist.len(),
            errors = report.error_with_unblock.len(),
            "Quarantine based unblock completed"
        );
        Ok(report)
    }
}
