use gatewarden_domain::{
    AddressGroup, BlockPlan, BlockReport, DomainError, FirewallPolicy, GroupCapacity,
    PolicyBlockRequest,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::services::{AddressSetReader, GroupMutator, TenantScopeResolver};

/// Use case for blocking IPs through a policy-bound address group.
///
/// Every partition in scope is planned (read, classify, capacity check)
/// before any of them is written, so a hard failure never leaves a request
/// half applied. Once writing starts, partitions succeed or fail
/// independently.
pub struct PolicyBlockIpUseCase {
    scope_resolver: Arc<TenantScopeResolver>,
    reader: Arc<AddressSetReader>,
    mutator: Arc<GroupMutator>,
    capacity: GroupCapacity,
}

impl PolicyBlockIpUseCase {
    pub fn new(
        scope_resolver: Arc<TenantScopeResolver>,
        reader: Arc<AddressSetReader>,
        mutator: Arc<GroupMutator>,
        capacity: GroupCapacity,
    ) -> Self {
        Self {
            scope_resolver,
            reader,
            mutator,
            capacity,
        }
    }

    /// Blocks the requested IPs.
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - Bad group/policy name, IP family mismatch
    /// * `DomainError::PolicyNotFound` / `GroupNotInPolicy` - Lookup failures
    /// * `DomainError::PermissionDenied` - The group could not be read
    /// * `DomainError::GroupCapacityExceeded` - The group is already full; with
    ///   several VDOMs in scope a full group is reported per VDOM instead
    ///
    /// Overflow and write failures are reported in `error_with_block`.
    #[instrument(skip(self, request), fields(group = %request.group_name, ips = request.ips.len()))]
    pub async fn execute(&self, request: &PolicyBlockRequest) -> Result<BlockReport, DomainError> {
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
            let requested = request.ips.as_slice();
            let plan = match BlockPlan::build(partition.clone(), &group, requested, self.capacity) {
                Ok(plan) => plan,
                Err(e @ DomainError::GroupCapacityExceeded { .. }) if scope.is_multi() => {
                    warn!(vdom = %partition, error = %e, "Address group is full, skipping VDOM");
                    BlockPlan::rejected(partition, &group, requested)
                }
                Err(e) => {
                    error!(error = %e, "Address group is full");
                    return Err(e);
                }
            };
            plans.push(plan);
        }

        let mut report = BlockReport::with_missing_vdoms(resolution.not_exist);
        for plan in &plans {
            let record_as = scope.is_multi().then(|| plan.partition.label());
            report.add_already_blocked(&plan.already_blocked);

            if plan.needs_write() {
                match self
                    .mutator
                    .apply_block(plan, request.family, &request.group_name, request.is_new_group)
                    .await
                {
                    Ok(()) => report.add_newly_blocked(&plan.admitted),
                    Err(e) => {
                        error!(vdom = %plan.partition, error = %e, "Failed to block IP addresses");
                        report.add_errors(record_as, &plan.admitted);
                    }
                }
            } else if plan.overflow.is_empty() {
                info!(vdom = %plan.partition, "IP addresses already blocked");
            }

            if !plan.overflow.is_empty() {
                warn!(
                    vdom = %plan.partition,
                    overflow = plan.overflow.len(),
                    limit = self.capacity.get(),
                    "Address group capacity reached, remaining IPs not blocked"
                );
                report.add_errors(record_as, &plan.overflow);
            }
        }

        info!(
            already = report.already_blocked.len(),
            newly = report.newly_blocked.len(),
            errors = report.error_with_block.len(),
            "Policy based block completed"
        );
        Ok(report)
    }
}
