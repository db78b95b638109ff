use async_trait::async_trait;
use gatewarden_domain::{ApiResponse, BannedIpSet, DomainError, TenantScope};
use std::sync::Arc;

/// The appliance-native ban list.
///
/// Unlike address groups, the ban API accepts several partitions in one
/// call and answers with one status per partition.
#[async_trait]
pub trait QuarantineGateway: Send + Sync {
    /// One record set per partition in scope.
    ///
    /// `Err(DomainError::PermissionDenied)` when the list cannot be read.
    async fn list_banned(&self, scope: &TenantScope) -> Result<Vec<BannedIpSet>, DomainError>;

    /// Bans `ips` for `expiry_secs` seconds; `0` never expires.
    async fn ban(
        &self,
        scope: &TenantScope,
        ips: &[Arc<str>],
        expiry_secs: u64,
    ) -> Result<ApiResponse, DomainError>;

    async fn unban(&self, scope: &TenantScope, ips: &[Arc<str>])
        -> Result<ApiResponse, DomainError>;
}
