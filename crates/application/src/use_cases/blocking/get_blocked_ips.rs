use gatewarden_domain::{
    BlockedIpListing, BlockedIpQuery, DomainError, GroupMembers, PolicyGroupListing,
    PolicyListing, QuarantineListing, VdomSelection,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::QuarantineGateway;
use crate::services::{AddressSetReader, TenantScopeResolver};

/// Lists what is currently blocked, for either mechanism.
pub struct GetBlockedIpsUseCase {
    scope_resolver: Arc<TenantScopeResolver>,
    reader: Arc<AddressSetReader>,
    gateway: Arc<dyn QuarantineGateway>,
}

impl GetBlockedIpsUseCase {
    pub fn new(
        scope_resolver: Arc<TenantScopeResolver>,
        reader: Arc<AddressSetReader>,
        gateway: Arc<dyn QuarantineGateway>,
    ) -> Self {
        Self {
            scope_resolver,
            reader,
            gateway,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: &BlockedIpQuery) -> Result<BlockedIpListing, DomainError> {
        match query {
            BlockedIpQuery::Quarantine { vdom } => self.quarantine(vdom).await,
            BlockedIpQuery::Policy {
                policy_name,
                group_names,
                vdom,
            } => self.policy(policy_name, group_names, vdom).await,
        }
    }

    async fn quarantine(&self, vdom: &VdomSelection) -> Result<BlockedIpListing, DomainError> {
        let resolution = self.scope_resolver.resolve(vdom).await?;
        let result = self.gateway.list_banned(&resolution.scope).await?;

        info!(
            sets = result.len(),
            banned = result.iter().map(|s| s.ips.len()).sum::<usize>(),
            "Quarantine list retrieved"
        );
        Ok(BlockedIpListing::Quarantine(QuarantineListing {
            result,
            vdom_not_exist: resolution.not_exist,
        }))
    }

    /// Group families are inferred from the policy field that references
    /// each group; unreferenced groups land in `addrgrp_not_exist`.
    async fn policy(
        &self,
        policy_name: &str,
        group_names: &[Arc<str>],
        vdom: &VdomSelection,
    ) -> Result<BlockedIpListing, DomainError> {
        let resolution = self.scope_resolver.resolve(vdom).await?;

        let mut result = Vec::new();
        for partition in resolution.scope.partitions() {
            let policy = self.reader.policy(&partition, policy_name).await?;

            let mut listing = PolicyGroupListing {
                vdom: partition.vdom().map(str::to_string),
                policy_name: policy.name.to_string(),
                srcaddr: to_strings(&policy.srcaddr),
                dstaddr: to_strings(&policy.dstaddr),
                srcaddr6: to_strings(&policy.srcaddr6),
                dstaddr6: to_strings(&policy.dstaddr6),
                ..Default::default()
            };

            for group in group_names {
                match policy.family_of(group) {
                    Some(family) => {
                        let snapshot = self.reader.read_group(&partition, group, family).await?;
                        listing.addrgrp.push(GroupMembers {
                            name: group.to_string(),
                            member: to_strings(&snapshot.members),
                        });
                    }
                    None => {
                        debug!(vdom = %partition, group = %group, "Group not referenced by policy");
                        listing.addrgrp_not_exist.push(group.to_string());
                    }
                }
            }
            result.push(listing);
        }

        Ok(BlockedIpListing::Policy(PolicyListing {
            result,
            vdom_not_exist: resolution.not_exist,
        }))
    }
}

fn to_strings(names: &[Arc<str>]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
