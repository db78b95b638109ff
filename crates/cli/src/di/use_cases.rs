use gatewarden_application::services::{AddressSetReader, GroupMutator, TenantScopeResolver};
use gatewarden_application::use_cases::{
    BlockIpUseCase, CheckHealthUseCase, GetBlockedIpsUseCase, PolicyBlockIpUseCase,
    PolicyUnblockIpUseCase, QuarantineBlockIpUseCase, QuarantineUnblockIpUseCase,
    UnblockIpUseCase,
};
use gatewarden_domain::Config;
use std::sync::Arc;

use super::Repositories;

pub struct UseCases {
    pub block_ip: Arc<BlockIpUseCase>,
    pub unblock_ip: Arc<UnblockIpUseCase>,
    pub get_blocked_ips: Arc<GetBlockedIpsUseCase>,
    pub check_health: Arc<CheckHealthUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let resolver = Arc::new(TenantScopeResolver::new(
            repos.vdoms.clone(),
            config.firewall.vdoms.clone(),
        ));
        let reader = Arc::new(AddressSetReader::new(
            repos.policies.clone(),
            repos.groups.clone(),
        ));
        let mutator = Arc::new(GroupMutator::new(repos.groups.clone()));

        let policy_block = Arc::new(PolicyBlockIpUseCase::new(
            resolver.clone(),
            reader.clone(),
            mutator.clone(),
            config.blocking.max_group_size,
        ));
        let policy_unblock = Arc::new(PolicyUnblockIpUseCase::new(
            resolver.clone(),
            reader.clone(),
            mutator,
        ));
        let quarantine_block = Arc::new(QuarantineBlockIpUseCase::new(
            resolver.clone(),
            repos.quarantine.clone(),
        ));
        let quarantine_unblock = Arc::new(QuarantineUnblockIpUseCase::new(
            resolver.clone(),
            repos.quarantine.clone(),
        ));

        Self {
            block_ip: Arc::new(BlockIpUseCase::new(policy_block, quarantine_block)),
            unblock_ip: Arc::new(UnblockIpUseCase::new(policy_unblock, quarantine_unblock)),
            get_blocked_ips: Arc::new(GetBlockedIpsUseCase::new(
                resolver.clone(),
                reader,
                repos.quarantine.clone(),
            )),
            check_health: Arc::new(CheckHealthUseCase::new(resolver, repos.policies.clone())),
        }
    }
}
