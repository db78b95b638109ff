mod address_set_reader;
mod group_mutator;
mod tenant_scope_resolver;

pub use address_set_reader::AddressSetReader;
pub use group_mutator::{CleanupOutcome, GroupMutator};
pub use tenant_scope_resolver::TenantScopeResolver;
