use async_trait::async_trait;
use gatewarden_domain::DomainError;

/// Source of the partitions (VDOMs) configured on the appliance.
#[async_trait]
pub trait VdomDirectory: Send + Sync {
    async fn list_vdoms(&self) -> Result<Vec<String>, DomainError>;
}
