use async_trait::async_trait;
use gatewarden_domain::{AddressEntry, AddressFamily, ApiResponse, DomainError, Partition};
use std::sync::Arc;

/// Repository interface for address groups and the address objects they hold.
///
/// Every call is scoped to exactly one partition. Implementations must not
/// cache membership: the reconciler relies on reading fresh state right
/// before it writes.
#[async_trait]
pub trait AddressGroupRepository: Send + Sync {
    /// Returns the member names of a group.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec)` - Current members; empty when the group does not exist
    /// * `Err(DomainError::PermissionDenied)` - If the group cannot be read
    async fn get_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
    ) -> Result<Vec<Arc<str>>, DomainError>;

    /// Creates a standalone address object.
    ///
    /// Fails when the object already exists; callers treat that as harmless.
    async fn create_address(
        &self,
        partition: &Partition,
        entry: &AddressEntry,
    ) -> Result<(), DomainError>;

    /// Attaches existing address objects to a group (member-add call).
    async fn add_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
        members: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError>;

    /// Overwrites the group's member list.
    async fn replace_members(
        &self,
        partition: &Partition,
        family: AddressFamily,
        group: &str,
        members: &[Arc<str>],
    ) -> Result<ApiResponse, DomainError>;

    /// Deletes a standalone address object. Fails while it is still referenced.
    async fn delete_address(
        &self,
        partition: &Partition,
        family: AddressFamily,
        name: &str,
    ) -> Result<(), DomainError>;
}
