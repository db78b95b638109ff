use gatewarden_domain::{
    AddressEntry, AddressFamily, ApiResponse, BlockPlan, DomainError, Partition, UnblockPlan,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::ports::AddressGroupRepository;

/// Result of deleting one standalone address object after an unblock.
pub type CleanupOutcome = (Arc<str>, Result<(), DomainError>);

/// Performs address group writes.
///
/// Executes whatever member list it is handed; capacity is enforced by the
/// reconciler before a plan reaches this point.
pub struct GroupMutator {
    repo: Arc<dyn AddressGroupRepository>,
}

impl GroupMutator {
    pub fn new(repo: Arc<dyn AddressGroupRepository>) -> Self {
        Self { repo }
    }

    /// Commits the admitted IPs of a block plan.
    ///
    /// With `is_new` the admitted objects are attached with a member-add call,
    /// otherwise the full member list (current + admitted) replaces the group.
    pub async fn apply_block(
        &self,
        plan: &BlockPlan,
        family: AddressFamily,
        group: &str,
        is_new: bool,
    ) -> Result<(), DomainError> {
        self.create_addresses(&plan.partition, &plan.admitted).await;

        let response = if is_new {
            self.repo
                .add_members(&plan.partition, family, group, &plan.admitted)
                .await?
        } else {
            self.repo
                .replace_members(&plan.partition, family, group, &plan.desired_members())
                .await?
        };

        Self::check(response, &plan.partition, group)?;

        debug!(
            vdom = %plan.partition,
            group,
            added = plan.admitted.len(),
            "IP addresses added to address group"
        );
        Ok(())
    }

    /// Replaces the group's members with the plan's survivors, then deletes
    /// the removed address objects one by one.
    ///
    /// Deletion is best effort: every outcome is returned and none of them
    /// fails the unblock.
    pub async fn apply_unblock(
        &self,
        plan: &UnblockPlan,
        family: AddressFamily,
        group: &str,
    ) -> Result<Vec<CleanupOutcome>, DomainError> {
        let response = self
            .repo
            .replace_members(&plan.partition, family, group, &plan.survivors)
            .await?;
        Self::check(response, &plan.partition, group)?;

        info!(
            vdom = %plan.partition,
            group,
            removed = plan.removed.len(),
            remaining = plan.survivors.len(),
            "IP addresses removed from address group"
        );

        Ok(self
            .delete_addresses(&plan.partition, family, &plan.removed)
            .await)
    }

    /// Deletes address objects, recording each failure and moving on.
    pub async fn delete_addresses(
        &self,
        partition: &Partition,
        family: AddressFamily,
        names: &[Arc<str>],
    ) -> Vec<CleanupOutcome> {
        let mut outcomes = Vec::with_capacity(names.len());
        for name in names {
            let result = match self.repo.delete_address(partition, family, name).await {
                Err(DomainError::NotFound(_)) => {
                    debug!(vdom = %partition, ip = %name, "Address object already gone");
                    Ok(())
                }
                other => other,
            };
            match &result {
                Ok(()) => debug!(vdom = %partition, ip = %name, "Address object deleted"),
                Err(e) => warn!(
                    vdom = %partition,
                    ip = %name,
                    error = %e,
                    "Not able to delete address object"
                ),
            }
            outcomes.push((name.clone(), result));
        }
        outcomes
    }

    async fn create_addresses(&self, partition: &Partition, ips: &[Arc<str>]) {
        for ip in ips {
            let entry = match AddressEntry::from_ip(ip) {
                Ok(entry) => entry,
                Err(e) => {
                    error!(ip = %ip, error = %e, "Skipping invalid address");
                    continue;
                }
            };
            // Usually fails because the object survived an earlier unblock.
            if let Err(e) = self.repo.create_address(partition, &entry).await {
                debug!(vdom = %partition, ip = %ip, error = %e, "Address object not created");
            }
        }
    }

    fn check(response: ApiResponse, partition: &Partition, group: &str) -> Result<(), DomainError> {
        if response.is_success() {
            return Ok(());
        }
        error!(
            vdom = %partition,
            group,
            response = ?response,
            "Check VDOM/user or API key permission to update address group"
        );
        Err(DomainError::MutationFailed(format!(
            "{} rejected update of address group {} ({:?})",
            partition, group, response
        )))
    }
}
