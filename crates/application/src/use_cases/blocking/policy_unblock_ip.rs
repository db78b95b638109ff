use gatewarden_domain::{
    AddressGroup, DomainError, FirewallPolicy, PolicyUnblockRequest, UnblockPlan, UnblockReport,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::services::{AddressSetReader, GroupMutator, TenantScopeResolver};

/// Use case for removing IPs from a policy-bound address group.
pub struct PolicyUnblockIpUseCase {
    scope_resolver: Arc<TenantScopeResolver>,
    reader: Arc<AddressSetReader>,
    mutator: Arc<GroupMutator>,
}

impl PolicyUnblockIpUseCase {
    pub fn new(
        scope_resolver: Arc<TenantScopeResolver>,
        reader: Arc<AddressSetReader>,
        mutator: Arc<GroupMutator>,
    ) -> Self {
        Self {
            scope_resolver,
            reader,
            mutator,
        }
    }

    /// Unblocks the requested IPs.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotInGroup` - None of the IPs is a member anywhere in scope
    /// * Lookup, permission and validation errors as for blocking
    #[instrument(skip(self, request), fields(group = %request.group_name, ips = request.ips.len()))]
    pub async fn execute(
        &self,
        request: &PolicyUnblockRequest,
    ) -> Result<UnblockReport, DomainError> {
        AddressGroup::validate_name(&request.group_name)?;
        FirewallPolicy::validate_name(&request.policy_name)?;
        request.ips.ensure_family(request.family)?;

        let resolution = self.scope_resolver.resolve(&request.vdom).await?;
        let scope = resolution.scope;

        let mut plans = Vec::new();
        for partition in scope.partitions() {
            let group = self
                .reader
                .read(
                    &partition,
                    &request.policy_name,
                    &request.group_name,
                    request.family,
                )
                .await?;
            plans.push(UnblockPlan::build(partition, &group, request.ips.as_slice()));
        }

        if plans.iter().all(|p| !p.needs_write()) {
            let err = DomainError::NotInGroup {
                ips: request.ips.to_strings().join(", "),
                group: request.group_name.to_string(),
            };
            error!(error = %err, "Nothing to unblock");
            return Err(err);
        }

        let mut report = UnblockReport::with_missing_vdoms(resolution.not_exist);
        for plan in &plans {
            let record_as = scope.is_multi().then(|| plan.partition.label());
            report.add_not_exist(&plan.not_exist);

            if !plan.needs_write() {
                continue;
            }

            match self
                .mutator
                .apply_unblock(plan, request.family, &request.group_name)
                .await
            {
                Ok(cleanup) => {
                    report.add_newly_unblocked(&plan.removed);
                    for (ip, outcome) in cleanup {
                        if outcome.is_err() && !report.cleanup_failed.iter().any(|c| **c == *ip) {
                            report.cleanup_failed.push(ip.to_string());
                        }
                    }
                }
                Err(e) => {
                    error!(vdom = %plan.partition, error = %e, "Failed to unblock IP addresses");
                    report.add_errors(record_as, &plan.removed);
                }
            }
        }

        if !report.cleanup_failed.is_empty() {
            warn!(
                left_behind = ?report.cleanup_failed,
                "Some address objects could not be deleted"
            );
        }

        info!(
            newly = report.newly_unblocked.len(),
            not_exist = report.not_exist.len(),
            errors = report.error_with_unblock.len(),
            "Policy based unblock completed"
        );
        Ok(report)
    }
}
