use async_trait::async_trait;
use gatewarden_domain::{DomainError, FirewallPolicy, Partition};

/// Read access to firewall policies.
#[async_trait]
pub trait PolicyRepository: Send + Sync {
    /// Looks a policy up by name; `Ok(None)` when no policy has that name.
    async fn find_by_name(
        &self,
        partition: &Partition,
        name: &str,
    ) -> Result<Option<FirewallPolicy>, DomainError>;

    /// Lists every policy of the partition.
    async fn list(&self, partition: &Partition) -> Result<Vec<FirewallPolicy>, DomainError>;
}
