use gatewarden_domain::{AddressFamily, AddressGroup, DomainError, FirewallPolicy, Partition};
use std::sync::Arc;
use tracing::{debug, error};

use crate::ports::{AddressGroupRepository, PolicyRepository};

/// Reads the current membership of policy-bound address groups.
pub struct AddressSetReader {
    policies: Arc<dyn PolicyRepository>,
    groups: Arc<dyn AddressGroupRepository>,
}

impl AddressSetReader {
    pub fn new(
        policies: Arc<dyn PolicyRepository>,
        groups: Arc<dyn AddressGroupRepository>,
    ) -> Self {
        Self { policies, groups }
    }

    pub async fn policy(
        &self,
        partition: &Partition,
        policy_name: &str,
    ) -> Result<FirewallPolicy, DomainError> {
        self.policies
            .find_by_name(partition, policy_name)
            .await?
            .ok_or_else(|| DomainError::PolicyNotFound(policy_name.to_string()))
    }

    /// Snapshot of `group` after checking that `policy_name` references it.
    pub async fn read(
        &self,
        partition: &Partition,
        policy_name: &str,
        group: &str,
        family: AddressFamily,
    ) -> Result<AddressGroup, DomainError> {
        let policy = self.policy(partition, policy_name).await?;
        if let Err(e) = policy.ensure_references(group, family) {
            error!(vdom = %partition, group, policy = policy_name, "{}", e);
            return Err(e);
        }
        self.read_group(partition, group, family).await
    }

    pub async fn read_group(
        &self,
        partition: &Partition,
        group: &str,
        family: AddressFamily,
    ) -> Result<AddressGroup, DomainError> {
        let members = self.groups.get_members(partition, family, group).await?;
        debug!(vdom = %partition, group, members = members.len(), "Address group read");
        Ok(AddressGroup::new(Arc::from(group), family, members))
    }
}
