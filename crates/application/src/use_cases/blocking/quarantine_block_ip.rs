use gatewarden_domain::{ApiResponse, BlockReport, DomainError, QuarantineBlockRequest};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::QuarantineGateway;
use crate::services::TenantScopeResolver;

/// Use case for banning IPs through the appliance-native ban list.
pub struct QuarantineBlockIpUseCase {
    scope_resolver: Arc<TenantScopeResolver>,
    gateway: Arc<dyn QuarantineGateway>,
}

impl QuarantineBlockIpUseCase {
    pub fn new(
        scope_resolver: Arc<TenantScopeResolver>,
        gateway: Arc<dyn QuarantineGateway>,
    ) -> Self {
        Self {
            scope_resolver,
            gateway,
        }
    }

    /// An IP counts as already blocked only when every partition in scope
    /// lists it; everything else is (re)submitted in a single ban call.
    #[instrument(skip(self, request), fields(ips = request.ips.len(), ttl = request.ttl.expiry_secs()))]
    pub async fn execute(
        &self,
        request: &QuarantineBlockRequest,
    ) -> Result<BlockReport, DomainError> {
        let resolution = self.scope_resolver.resolve(&request.vdom).await?;
        let scope = resolution.scope;

        let banned = self.gateway.list_banned(&scope).await?;

        let (already, pending): (Vec<Arc<str>>, Vec<Arc<str>>) =
            request.ips.as_slice().iter().cloned().partition(|ip| {
                !banned.is_empty() && banned.iter().all(|set| set.contains(ip))
            });

        let mut report = BlockReport::with_missing_vdoms(resolution.not_exist);
        report.add_already_blocked(&already);

        if pending.is_empty() {
            info!("IP addresses already quarantined");
            return Ok(report);
        }

        match self
            .gateway
            .ban(&scope, &pending, request.ttl.expiry_secs())
            .await
        {
            Ok(ApiResponse::Success) => report.add_newly_blocked(&pending),
            Ok(ApiResponse::PartialSuccess(statuses)) if !statuses.is_empty() => {
                for status in &statuses {
                    if status.success {
                        report.add_newly_blocked(&pending);
                    } else {
                        let vdom = status.vdom.as_deref().unwrap_or("global");
                        warn!(vdom, "Ban rejected for VDOM");
                        report.add_errors(Some(vdom), &pending);
                    }
                }
            }
            Ok(response) => {
                error!(
                    response = ?response,
                    "Check VDOM/user or API key permission to quarantine IP addresses"
                );
                report.add_errors(None, &pending);
            }
            Err(e) => {
                error!(error = %e, "Failed to quarantine IP addresses");
                report.add_errors(None, &pending);
            }
        }

        info!(
            already = report.already_blocked.len(),
            newly = report.newly_blocked.len(),
            errors = report.error_with_block.len(),
            "Quarantine based block completed"
        );
        Ok(report)
    }
}
